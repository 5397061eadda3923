//! Loose keyword lookups used while drafting.
//!
//! Unlike the analyzer, these use plain substring containment: a learner
//! typing "solving" or "applications" still steers the draft.

use super::{verbs_for, BloomsLevel};

/// Fallback when a level description mentions no known keyword.
pub const DEFAULT_LEVEL: BloomsLevel = BloomsLevel::Apply;

/// Fallback verb when no level is known at all.
pub const UNKNOWN_LEVEL_VERB: &str = "demonstrate";

const LEVEL_KEYWORDS: &[(BloomsLevel, &[&str])] = &[
    (BloomsLevel::Remember, &["remember", "recall", "memorize", "identify", "list"]),
    (BloomsLevel::Understand, &["understand", "explain", "describe", "summarize"]),
    (BloomsLevel::Apply, &["apply", "use", "implement", "solve"]),
    (BloomsLevel::Analyze, &["analyze", "compare", "contrast", "examine"]),
    (BloomsLevel::Evaluate, &["evaluate", "assess", "judge", "critique"]),
    (BloomsLevel::Create, &["create", "design", "develop", "compose"]),
];

/// Maps a free-text level description to a Bloom's level.
///
/// Keyword groups are tested in priority order and the first group with a
/// hit wins. Text with no hit resolves to [`DEFAULT_LEVEL`].
pub fn resolve_blooms_level(text: &str) -> BloomsLevel {
    let lowered = text.to_lowercase();
    LEVEL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(level, _)| *level)
        .unwrap_or(DEFAULT_LEVEL)
}

/// Picks the first canonical verb of `level`, in table order, that occurs in `text`.
///
/// Falls back to the level's default verb, or [`UNKNOWN_LEVEL_VERB`] when
/// no level is given.
pub fn pick_action_verb(text: &str, level: Option<BloomsLevel>) -> &'static str {
    let Some(level) = level else {
        return UNKNOWN_LEVEL_VERB;
    };
    let lowered = text.to_lowercase();
    verbs_for(level)
        .iter()
        .copied()
        .find(|verb| lowered.contains(verb))
        .unwrap_or_else(|| level.default_verb())
}
