//! Console front end for drafting learning objectives.
//!
//! Usage: `objective-sherpa [CONFIG_FILE]`
//!
//! Reads one message per line from stdin. Lines starting with `/` are
//! commands; see [`HELP`].

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{error, info};

use objective_sherpa::application::{ChatError, ChatSession};
use objective_sherpa::config::{AppConfig, ConfigError, LoggingConfig};
use objective_sherpa::domain::analysis::ObjectiveAnalysis;
use objective_sherpa::domain::dataset::{
    add_computed_columns, sample_table, validate_columns, Column, DatasetError, Table, SAMPLE_SEED,
};
use objective_sherpa::domain::taxonomy::sample_objectives;

const HELP: &str = "Commands: /analysis /history /examples /sample /export /reset /help /quit";

const SAMPLE_ROWS: usize = 10;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("failed to serialize session: {0}")]
    Json(#[from] serde_json::Error),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialize tracing subscriber: {0}")]
    Tracing(String),
}

fn main() {
    if let Err(error) = run() {
        eprintln!("objective-sherpa error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load()?,
    };
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging)?;

    let mut session = ChatSession::new(&config.conversation)?;
    info!(session_id = %session.id(), "Console ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n\n{HELP}", session.transcript().greeting().content())?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "/quit" => break,
            "/help" => writeln!(stdout, "{HELP}")?,
            "/analysis" => match session.current_analysis() {
                Some(analysis) => print_analysis(&mut stdout, &analysis)?,
                None => writeln!(stdout, "No objective yet. Type 'suggest' once the template is shown.")?,
            },
            "/history" => print_history(&mut stdout, session.objective_history())?,
            "/examples" => print_examples(&mut stdout)?,
            "/sample" => print_sample(&mut stdout)?,
            "/export" => writeln!(stdout, "{}", serde_json::to_string_pretty(&session.snapshot())?)?,
            "/reset" => {
                session.reset()?;
                writeln!(stdout, "{}", session.transcript().greeting().content())?;
            }
            _ => match session.send(&line) {
                Ok(result) => {
                    writeln!(stdout, "\n{}\n", result.reply.text)?;
                    if let Some(analysis) = result.analysis {
                        print_analysis(&mut stdout, &analysis)?;
                    }
                }
                Err(ChatError::EmptyMessage) => {}
                Err(e) => {
                    error!(error = %e, "Message rejected");
                    writeln!(stdout, "{e}")?;
                }
            },
        }
        prompt(&mut stdout)?;
    }

    info!(
        session_id = %session.id(),
        objectives = session.objective_history().len(),
        "Console closed"
    );
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), AppError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| logging.env_filter())
        .map_err(|e| AppError::Config(ConfigError::from(e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let result = if logging.is_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| AppError::Tracing(e.to_string()))
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn print_analysis(out: &mut impl Write, analysis: &ObjectiveAnalysis) -> io::Result<()> {
    writeln!(out, "Bloom's level: {}", analysis.level_label())?;
    writeln!(out, "Measurable: {}", if analysis.measurable { "yes" } else { "no" })?;
    writeln!(out, "Clarity: {}", analysis.clarity_score)?;
    for suggestion in &analysis.suggestions {
        writeln!(out, "  - {suggestion}")?;
    }
    Ok(())
}

fn print_history(out: &mut impl Write, history: &[String]) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "No objectives saved yet.");
    }
    for (i, objective) in history.iter().enumerate() {
        writeln!(out, "{}. {objective}", i + 1)?;
    }
    Ok(())
}

fn print_examples(out: &mut impl Write) -> io::Result<()> {
    for category in sample_objectives() {
        writeln!(out, "{}", category.label)?;
        for objective in category.objectives {
            writeln!(out, "  - {objective}")?;
        }
    }
    Ok(())
}

fn print_sample(out: &mut impl Write) -> Result<(), AppError> {
    let table = sample_table(SAMPLE_ROWS, SAMPLE_SEED)?;
    validate_columns(&table, None)?;
    let processed = add_computed_columns(&table)?;
    print_table(out, &processed)?;
    Ok(())
}

fn print_table(out: &mut impl Write, table: &Table) -> io::Result<()> {
    let names = table.column_names();
    writeln!(out, "{}", names.join("\t"))?;
    for row in 0..table.row_count().unwrap_or(0) {
        let cells: Vec<String> = names
            .iter()
            .map(|name| match table.column(name) {
                Some(Column::Date(v)) => v[row].to_string(),
                Some(Column::Float(v)) => format!("{:.3}", v[row]),
                Some(Column::Text(v)) => v[row].clone(),
                None => String::new(),
            })
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}
