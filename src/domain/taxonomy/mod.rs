//! Bloom's taxonomy module.
//!
//! Holds the static level/verb table and the keyword lookups the drafting
//! dialogue uses to turn free text into a level and an action verb.
//!
//! # Components
//!
//! - `BloomsLevel` - The six cognitive levels, in priority order
//! - `verb_table` - Canonical verbs per level and whole-word scanning
//! - `keywords` - Substring lookups for level descriptions and verb picking
//! - `samples` - Example objectives per level, for display only

mod blooms_level;
mod keywords;
mod samples;
mod verb_table;

pub use blooms_level::BloomsLevel;
pub use keywords::{
    pick_action_verb, resolve_blooms_level, DEFAULT_LEVEL, UNKNOWN_LEVEL_VERB,
};
pub use samples::{sample_objectives, SampleCategory};
pub use verb_table::{find_verb, verbs_for, VerbMatch};
