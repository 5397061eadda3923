//! Analysis Module - Pure domain services for objective analysis.
//!
//! # Components
//!
//! - `ObjectiveAnalyzer` - Bloom's level, measurability and clarity scoring
//! - `Suggestion` - Improvement hints derived from an analysis
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. The only shared data is the
//! read-only verb table in `taxonomy`.

mod objective_analyzer;
mod suggestion;

pub use objective_analyzer::{
    analyze_objective, ObjectiveAnalysis, ObjectiveAnalyzer, BASE_CLARITY, COMPLEX_COMMA_COUNT,
    DETAILED_WORD_COUNT, HIGHER_ORDER_THRESHOLD, SPECIFICITY_THRESHOLD, WORDY_WORD_COUNT,
};
pub use suggestion::Suggestion;
