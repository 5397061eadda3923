//! Sample data, schema validation and computed columns.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use super::table::{Column, DatasetError, Table};

/// Columns required by [`add_computed_columns`].
pub const DEFAULT_REQUIRED_COLUMNS: &[&str] = &["value_a", "value_b"];

/// Seed used by the demo so every run shows the same sample.
pub const SAMPLE_SEED: u64 = 42;

const CATEGORIES: &[&str] = &["A", "B", "C"];

/// Generates a reproducible sample table.
///
/// Columns: `date` (daily from 2024-01-01), `value_a`, `value_b` (standard
/// normal) and `category` (one of A, B, C).
pub fn sample_table(rows: usize, seed: u64) -> Result<Table, DatasetError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

    let dates = (0..rows).map(|i| start + Duration::days(i as i64)).collect();
    let value_a = (0..rows).map(|_| rng.sample::<f64, _>(StandardNormal)).collect();
    let value_b = (0..rows).map(|_| rng.sample::<f64, _>(StandardNormal)).collect();
    let category = (0..rows)
        .map(|_| CATEGORIES.choose(&mut rng).copied().unwrap_or("A").to_string())
        .collect();

    Table::new()
        .with_column("date", Column::Date(dates))?
        .with_column("value_a", Column::Float(value_a))?
        .with_column("value_b", Column::Float(value_b))?
        .with_column("category", Column::Text(category))
}

/// Checks that every required column is present.
///
/// `None` checks [`DEFAULT_REQUIRED_COLUMNS`].
///
/// # Errors
///
/// - `MissingColumns` naming every absent column, not just the first
pub fn validate_columns(table: &Table, required: Option<&[&str]>) -> Result<(), DatasetError> {
    let missing: Vec<String> = required
        .unwrap_or(DEFAULT_REQUIRED_COLUMNS)
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns { missing })
    }
}

/// Returns a copy of the table with `sum`, `mean` and `abs_diff` columns.
///
/// The columns are added only when `value_a` and `value_b` are both float
/// columns; otherwise the copy is returned unchanged.
pub fn add_computed_columns(table: &Table) -> Result<Table, DatasetError> {
    let processed = table.clone();
    let (Some(a), Some(b)) = (
        table.column("value_a").and_then(Column::as_floats),
        table.column("value_b").and_then(Column::as_floats),
    ) else {
        return Ok(processed);
    };

    let pairs = || a.iter().zip(b.iter());
    processed
        .with_column("sum", Column::Float(pairs().map(|(x, y)| x + y).collect()))?
        .with_column("mean", Column::Float(pairs().map(|(x, y)| (x + y) / 2.0).collect()))?
        .with_column("abs_diff", Column::Float(pairs().map(|(x, y)| (x - y).abs()).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab_table() -> Table {
        Table::new()
            .with_column("value_a", Column::Float(vec![1.0, -2.0, 3.5]))
            .unwrap()
            .with_column("value_b", Column::Float(vec![3.0, 2.0, -0.5]))
            .unwrap()
    }

    mod sample {
        use super::*;

        #[test]
        fn has_expected_shape() {
            let table = sample_table(10, SAMPLE_SEED).unwrap();
            assert_eq!(table.row_count(), Some(10));
            assert_eq!(table.column_names(), vec!["date", "value_a", "value_b", "category"]);
        }

        #[test]
        fn same_seed_same_table() {
            assert_eq!(sample_table(5, 7).unwrap(), sample_table(5, 7).unwrap());
        }

        #[test]
        fn dates_are_consecutive_from_new_year() {
            let table = sample_table(3, SAMPLE_SEED).unwrap();
            let Some(Column::Date(dates)) = table.column("date") else {
                panic!("date column missing");
            };
            assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
            assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        }

        #[test]
        fn values_are_standard_normal() {
            let table = sample_table(5_000, SAMPLE_SEED).unwrap();
            let values = table.column("value_a").and_then(Column::as_floats).unwrap();
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

            assert!(mean.abs() < 0.1, "mean {mean}");
            assert!((variance.sqrt() - 1.0).abs() < 0.1, "std {}", variance.sqrt());
            assert!(values.iter().any(|v| v.abs() > 3.0));
        }

        #[test]
        fn categories_come_from_fixed_set() {
            let table = sample_table(30, SAMPLE_SEED).unwrap();
            let Some(Column::Text(categories)) = table.column("category") else {
                panic!("category column missing");
            };
            assert!(categories.iter().all(|c| CATEGORIES.contains(&c.as_str())));
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn default_columns_present() {
            assert!(validate_columns(&ab_table(), None).is_ok());
        }

        #[test]
        fn reports_every_missing_column() {
            let err = validate_columns(&ab_table(), Some(&["value_a", "x", "y"])).unwrap_err();
            assert_eq!(
                err,
                DatasetError::MissingColumns {
                    missing: vec!["x".into(), "y".into()]
                }
            );
            assert_eq!(err.to_string(), "Table is missing required columns: x, y");
        }

        #[test]
        fn empty_table_misses_defaults() {
            let err = validate_columns(&Table::new(), None).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Table is missing required columns: value_a, value_b"
            );
        }
    }

    mod computed {
        use super::*;

        #[test]
        fn adds_sum_mean_and_abs_diff() {
            let processed = add_computed_columns(&ab_table()).unwrap();
            let floats = |name| processed.column(name).and_then(Column::as_floats).unwrap().to_vec();

            assert_eq!(floats("sum"), vec![4.0, 0.0, 3.0]);
            assert_eq!(floats("mean"), vec![2.0, 0.0, 1.5]);
            assert_eq!(floats("abs_diff"), vec![2.0, 4.0, 4.0]);
        }

        #[test]
        fn leaves_input_untouched() {
            let input = ab_table();
            let _ = add_computed_columns(&input).unwrap();
            assert_eq!(input.column_names(), vec!["value_a", "value_b"]);
        }

        #[test]
        fn skips_when_value_columns_absent() {
            let table = Table::new()
                .with_column("value_a", Column::Float(vec![1.0]))
                .unwrap();
            let processed = add_computed_columns(&table).unwrap();
            assert_eq!(processed, table);
        }

        #[test]
        fn sample_table_gains_three_columns() {
            let processed = add_computed_columns(&sample_table(4, SAMPLE_SEED).unwrap()).unwrap();
            assert_eq!(processed.column_names().len(), 7);
        }
    }
}
