//! Canonical action verbs for each Bloom's level.
//!
//! The table is static and read-only. Word-boundary patterns built from it
//! are compiled once, on first use, and shared process-wide.

use once_cell::sync::Lazy;
use regex::Regex;

use super::BloomsLevel;

const REMEMBER_VERBS: &[&str] = &[
    "define", "describe", "identify", "label", "list", "match", "name", "outline", "recall",
    "recognize", "reproduce", "select", "state",
];

const UNDERSTAND_VERBS: &[&str] = &[
    "classify", "compare", "contrast", "demonstrate", "discuss", "explain", "extend", "illustrate",
    "infer", "interpret", "paraphrase", "predict", "summarize", "translate",
];

const APPLY_VERBS: &[&str] = &[
    "apply", "change", "compute", "construct", "demonstrate", "discover", "manipulate", "modify",
    "operate", "predict", "prepare", "produce", "relate", "show", "solve", "use",
];

const ANALYZE_VERBS: &[&str] = &[
    "analyze", "break down", "categorize", "compare", "contrast", "differentiate", "discriminate",
    "distinguish", "examine", "experiment", "identify", "illustrate", "infer", "outline", "relate",
    "select", "separate",
];

const EVALUATE_VERBS: &[&str] = &[
    "appraise", "argue", "assess", "choose", "compare", "conclude", "contrast", "criticize",
    "critique", "defend", "evaluate", "judge", "justify", "prioritize", "rate", "select",
    "support", "value",
];

const CREATE_VERBS: &[&str] = &[
    "assemble", "compose", "construct", "create", "design", "develop", "devise", "formulate",
    "generate", "hypothesize", "invent", "make", "organize", "plan", "produce", "write",
];

/// Returns the canonical verbs for a level, in table order.
pub fn verbs_for(level: BloomsLevel) -> &'static [&'static str] {
    match level {
        BloomsLevel::Remember => REMEMBER_VERBS,
        BloomsLevel::Understand => UNDERSTAND_VERBS,
        BloomsLevel::Apply => APPLY_VERBS,
        BloomsLevel::Analyze => ANALYZE_VERBS,
        BloomsLevel::Evaluate => EVALUATE_VERBS,
        BloomsLevel::Create => CREATE_VERBS,
    }
}

/// Case-insensitive whole-word pattern per level, in priority order.
static LEVEL_PATTERNS: Lazy<Vec<(BloomsLevel, Regex)>> = Lazy::new(|| {
    BloomsLevel::ALL
        .into_iter()
        .map(|level| {
            let escaped: Vec<String> = verbs_for(level).iter().map(|v| regex::escape(v)).collect();
            let pattern = Regex::new(&format!(r"(?i)\b({})\b", escaped.join("|")))
                .expect("verb table entries are literal words");
            (level, pattern)
        })
        .collect()
});

/// A canonical verb found as a whole word in some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbMatch {
    /// First level, in priority order, with a whole-word hit.
    pub level: BloomsLevel,
    /// The verb as written in the table (lowercase).
    pub verb: String,
}

/// Scans the text once per level in priority order and returns the first hit.
///
/// Matching is whole-word: "list" does not match inside "listen".
pub fn find_verb(text: &str) -> Option<VerbMatch> {
    LEVEL_PATTERNS.iter().find_map(|(level, pattern)| {
        pattern.find(text).map(|m| VerbMatch {
            level: *level,
            verb: m.as_str().to_lowercase(),
        })
    })
}
