//! Objective Analyzer - Bloom's level detection, measurability and clarity scoring.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Suggestion;
use crate::domain::foundation::ClarityScore;
use crate::domain::taxonomy::{find_verb, BloomsLevel, VerbMatch};

/// Starting tally before any clarity rule is applied.
pub const BASE_CLARITY: i32 = 5;

/// Objectives with at least this many words earn a bonus.
pub const DETAILED_WORD_COUNT: usize = 10;

/// Objectives with more than this many words are penalized.
pub const WORDY_WORD_COUNT: usize = 30;

/// Objectives with more than this many commas are penalized.
pub const COMPLEX_COMMA_COUNT: usize = 2;

/// Below this score the objective is asked to be more specific.
pub const SPECIFICITY_THRESHOLD: u8 = 6;

/// Below this score a recall-level objective is nudged upward.
pub const HIGHER_ORDER_THRESHOLD: u8 = 8;

const STANDARD_PHRASE: &str = "will be able to";

const CONDITION_WORDS: &[&str] = &["using", "through", "by", "with"];

/// Result of analyzing one objective.
///
/// Derived on demand from the objective text; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveAnalysis {
    /// The level of the first matching verb, `None` when no verb matched.
    pub blooms_level: Option<BloomsLevel>,
    /// The verb that decided the level.
    pub matched_verb: Option<String>,
    /// True if any taxonomy verb appears as a whole word.
    pub measurable: bool,
    pub clarity_score: ClarityScore,
    /// Hints in fixed rule order.
    pub suggestions: Vec<Suggestion>,
}

impl ObjectiveAnalysis {
    /// Returns the level name, or "Unknown".
    pub fn level_label(&self) -> &'static str {
        self.blooms_level.map(|l| l.name()).unwrap_or("Unknown")
    }

    /// Returns the suggestion texts in order.
    pub fn suggestion_texts(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(Suggestion::text).collect()
    }
}

/// Analyzer for learning objective wording.
pub struct ObjectiveAnalyzer;

impl ObjectiveAnalyzer {
    /// Analyzes an objective.
    ///
    /// A single whole-word scan decides both the level and measurability.
    pub fn analyze(objective: &str) -> ObjectiveAnalysis {
        let verb_match = find_verb(objective);
        let measurable = verb_match.is_some();
        let clarity_score = Self::score_clarity(objective, measurable);
        let blooms_level = verb_match.as_ref().map(|m| m.level);
        let suggestions = Self::suggest(blooms_level, measurable, clarity_score);

        debug!(
            level = ?blooms_level,
            measurable,
            clarity = clarity_score.value(),
            suggestions = suggestions.len(),
            "Analyzed objective"
        );

        ObjectiveAnalysis {
            blooms_level,
            matched_verb: verb_match.map(|VerbMatch { verb, .. }| verb),
            measurable,
            clarity_score,
            suggestions,
        }
    }

    /// Computes the clarity score.
    ///
    /// # Rules
    /// - Start at 5
    /// - +2 if measurable
    /// - +1 if at least 10 words
    /// - +1 if it contains "will be able to"
    /// - +1 if it contains a condition word (using, through, by, with)
    /// - -1 if more than 30 words
    /// - -1 if more than 2 commas
    ///
    /// The tally is clamped into 1..=10.
    pub fn score_clarity(objective: &str, measurable: bool) -> ClarityScore {
        let lowered = objective.to_lowercase();
        let words = objective.split_whitespace().count();
        let commas = objective.matches(',').count();

        let mut score = BASE_CLARITY;
        if measurable {
            score += 2;
        }
        if words >= DETAILED_WORD_COUNT {
            score += 1;
        }
        if lowered.contains(STANDARD_PHRASE) {
            score += 1;
        }
        if CONDITION_WORDS.iter().any(|w| lowered.contains(w)) {
            score += 1;
        }
        if words > WORDY_WORD_COUNT {
            score -= 1;
        }
        if commas > COMPLEX_COMMA_COUNT {
            score -= 1;
        }

        ClarityScore::clamped(score)
    }

    /// Builds suggestions; every matching rule contributes, in fixed order.
    pub fn suggest(
        blooms_level: Option<BloomsLevel>,
        measurable: bool,
        clarity: ClarityScore,
    ) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();
        if !measurable {
            suggestions.push(Suggestion::UseMeasurableVerb);
        }
        if clarity.value() < SPECIFICITY_THRESHOLD {
            suggestions.push(Suggestion::AddSpecificity);
        }
        if blooms_level.is_none() {
            suggestions.push(Suggestion::IncludeActionVerb);
        }
        if clarity.value() < HIGHER_ORDER_THRESHOLD && blooms_level == Some(BloomsLevel::Remember) {
            suggestions.push(Suggestion::ConsiderHigherOrder);
        }
        suggestions
    }
}

/// Analyzes an objective. Shorthand for [`ObjectiveAnalyzer::analyze`].
pub fn analyze_objective(objective: &str) -> ObjectiveAnalysis {
    ObjectiveAnalyzer::analyze(objective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod level_and_measurability {
        use super::*;

        #[test]
        fn define_is_remember_and_measurable() {
            let analysis = analyze_objective("Students will define three key terms.");
            assert_eq!(analysis.blooms_level, Some(BloomsLevel::Remember));
            assert_eq!(analysis.matched_verb.as_deref(), Some("define"));
            assert!(analysis.measurable);
        }

        #[test]
        fn no_verb_is_unknown_and_not_measurable() {
            let analysis = analyze_objective("Students will appreciate poetry.");
            assert_eq!(analysis.blooms_level, None);
            assert_eq!(analysis.level_label(), "Unknown");
            assert!(!analysis.measurable);
        }

        #[test]
        fn verbs_inside_other_words_do_not_count() {
            let analysis = analyze_objective("Students will listen to podcasts.");
            assert_eq!(analysis.blooms_level, None);
            assert!(!analysis.measurable);
        }

        #[test]
        fn assess_is_evaluate_and_measurable() {
            let analysis = analyze_objective("Students will assess the validity of historical sources.");
            assert_eq!(analysis.blooms_level, Some(BloomsLevel::Evaluate));
            assert_eq!(analysis.matched_verb.as_deref(), Some("assess"));
            assert!(analysis.measurable);
        }

        #[test]
        fn lowest_matching_level_wins() {
            let analysis = analyze_objective("Design a bridge and justify the choice");
            assert_eq!(analysis.blooms_level, Some(BloomsLevel::Evaluate));
        }
    }

    mod clarity {
        use super::*;

        #[test]
        fn short_measurable_objective_scores_seven() {
            let analysis = analyze_objective("Students will define three key terms.");
            assert_eq!(analysis.clarity_score.value(), 7);
        }

        #[test]
        fn full_standard_objective_scores_ten() {
            let objective = "After completing this course, students will be able to solve \
                             complex problems using appropriate formulas and techniques.";
            let analysis = analyze_objective(objective);
            // 5 + 2 measurable + 1 length + 1 phrase + 1 condition
            assert_eq!(analysis.clarity_score.value(), 10);
        }

        #[test]
        fn phrase_match_ignores_case() {
            let score = ObjectiveAnalyzer::score_clarity("Students WILL BE ABLE TO", false);
            // 5 + 1 phrase
            assert_eq!(score.value(), 6);
        }

        #[test]
        fn wordy_and_comma_heavy_objective_takes_both_penalties() {
            // 35 words, 4 commas, no verb, no phrase, no condition word
            let objective = "Learners in the program, across several terms, will gain \
                             a feeling for poems, plays, stories and songs from many \
                             eras and places so that their own taste in reading grows \
                             over time in a steady way";
            assert_eq!(objective.split_whitespace().count(), 35);
            assert_eq!(objective.matches(',').count(), 4);

            let analysis = analyze_objective(objective);
            assert!(!analysis.measurable);
            // 5 + 1 length - 1 wordy - 1 commas
            assert_eq!(analysis.clarity_score.value(), 4);
        }

        #[test]
        fn score_never_leaves_range() {
            let long = "word, ".repeat(200);
            let score = ObjectiveAnalyzer::score_clarity(&long, false);
            assert!(score >= ClarityScore::MIN);
            assert!(score <= ClarityScore::MAX);
        }
    }

    mod suggestions {
        use super::*;

        #[test]
        fn remember_objective_gets_only_higher_order_nudge() {
            let analysis = analyze_objective("Students will define three key terms.");
            assert_eq!(analysis.suggestions, vec![Suggestion::ConsiderHigherOrder]);
        }

        #[test]
        fn vague_objective_gets_three_hints_in_order() {
            let analysis = analyze_objective("Know things.");
            assert_eq!(
                analysis.suggestions,
                vec![
                    Suggestion::UseMeasurableVerb,
                    Suggestion::AddSpecificity,
                    Suggestion::IncludeActionVerb,
                ]
            );
        }

        #[test]
        fn clear_remember_objective_is_not_nudged() {
            let score = ClarityScore::clamped(8);
            let hints = ObjectiveAnalyzer::suggest(Some(BloomsLevel::Remember), true, score);
            assert!(hints.is_empty());
        }

        #[test]
        fn strong_objective_has_no_suggestions() {
            let objective = "After completing this course, students will be able to evaluate \
                             research claims using published statistical evidence.";
            assert!(analyze_objective(objective).suggestions.is_empty());
        }

        #[test]
        fn texts_follow_suggestion_order() {
            let analysis = analyze_objective("Know things.");
            let texts = analysis.suggestion_texts();
            assert_eq!(texts.len(), 3);
            assert_eq!(texts[0], Suggestion::UseMeasurableVerb.text());
        }
    }

    proptest! {
        #[test]
        fn analysis_is_pure(text in ".{0,120}") {
            prop_assert_eq!(analyze_objective(&text), analyze_objective(&text));
        }

        #[test]
        fn measurable_iff_level_known(text in "[a-zA-Z ,.]{0,120}") {
            let analysis = analyze_objective(&text);
            prop_assert_eq!(analysis.measurable, analysis.blooms_level.is_some());
        }

        #[test]
        fn clarity_within_bounds(text in ".{0,400}") {
            let value = analyze_objective(&text).clarity_score.value();
            prop_assert!((1..=10).contains(&value));
        }
    }
}
