//! Objective composition from onboarding answers.

use tracing::debug;

use crate::domain::taxonomy::{pick_action_verb, resolve_blooms_level};

/// Fixed opening of every composed objective.
pub const OBJECTIVE_PREFIX: &str = "After completing this course, students will be able to ";

/// Subject keyword groups and their clause templates, tested in order.
///
/// `{verb}` is replaced by the picked action verb.
const DOMAIN_CLAUSES: &[(&[&str], &str)] = &[
    (
        &["math", "statistic"],
        "{verb} complex problems using appropriate formulas and techniques",
    ),
    (
        &["literature", "english"],
        "{verb} texts to identify themes and literary devices",
    ),
    (
        &["science"],
        "{verb} scientific principles to explain natural phenomena",
    ),
    (
        &["history"],
        "{verb} historical events and their impact on modern society",
    ),
    (
        &["art"],
        "{verb} artistic techniques and principles in original compositions",
    ),
    (
        &["programming", "coding", "computer"],
        "{verb} algorithms to solve computational problems efficiently",
    ),
];

const GENERIC_CLAUSE: &str = "{verb} key concepts and principles related to {subject}";

/// Builds the content clause for a subject.
///
/// The subject is trimmed and lower-cased before matching and before it is
/// spliced into the generic clause.
pub fn domain_clause(subject: &str, verb: &str) -> String {
    let lowered = subject.trim().to_lowercase();
    DOMAIN_CLAUSES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, template)| template.replace("{verb}", verb))
        .unwrap_or_else(|| {
            GENERIC_CLAUSE
                .replace("{verb}", verb)
                .replace("{subject}", &lowered)
        })
}

/// Composes a one-sentence learning objective.
///
/// The level is resolved from `level`, the verb is picked from
/// `measurement`, and the clause is chosen by subject keywords.
pub fn compose_objective(subject: &str, level: &str, measurement: &str) -> String {
    let blooms_level = resolve_blooms_level(level);
    let verb = pick_action_verb(measurement, Some(blooms_level));
    let objective = format!("{}{}.", OBJECTIVE_PREFIX, domain_clause(subject, verb));

    debug!(level = %blooms_level, verb, "Composed objective");
    objective
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_subject_uses_formula_clause() {
        let objective = compose_objective("mathematics", "apply knowledge", "solve problems");
        assert_eq!(
            objective,
            "After completing this course, students will be able to solve complex problems \
             using appropriate formulas and techniques."
        );
    }

    #[test]
    fn statistics_matches_math_group() {
        let objective = compose_objective("Intro Statistics", "apply", "use software");
        assert!(objective.contains("use complex problems using appropriate formulas"));
    }

    #[test]
    fn every_objective_is_one_prefixed_sentence() {
        for subject in ["math", "English", "science", "history", "art", "coding", "cooking"] {
            let objective = compose_objective(subject, "evaluate", "critique");
            assert!(objective.starts_with(OBJECTIVE_PREFIX), "{objective}");
            assert!(objective.ends_with('.'));
            assert_eq!(objective.matches('.').count(), 1, "{objective}");
        }
    }

    #[test]
    fn groups_are_tested_in_order() {
        // "computer science" hits science before programming
        let clause = domain_clause("Computer Science", "apply");
        assert!(clause.contains("scientific principles"));
    }

    #[test]
    fn art_matches_as_substring() {
        let clause = domain_clause("Studio Art", "create");
        assert_eq!(
            clause,
            "create artistic techniques and principles in original compositions"
        );
    }

    #[test]
    fn unknown_subject_uses_generic_clause() {
        let objective = compose_objective("Cooking", "create", "design menus");
        assert_eq!(
            objective,
            "After completing this course, students will be able to design key concepts \
             and principles related to cooking."
        );
    }

    #[test]
    fn literature_clause_has_no_commas() {
        let objective = compose_objective("English", "analyze", "examine poems");
        assert_eq!(
            objective,
            "After completing this course, students will be able to examine texts to identify \
             themes and literary devices."
        );
        assert_eq!(objective.matches(',').count(), 1);
    }

    #[test]
    fn domain_clauses_match_fixed_texts() {
        let cases = [
            ("science", "explain scientific principles to explain natural phenomena"),
            ("world history", "explain historical events and their impact on modern society"),
            ("coding", "explain algorithms to solve computational problems efficiently"),
        ];
        for (subject, expected) in cases {
            assert_eq!(domain_clause(subject, "explain"), expected, "subject: {subject}");
        }
    }

    #[test]
    fn level_and_measurement_defaults_apply() {
        // level falls back to Apply, measurement has no Apply verb
        let objective = compose_objective("Cooking", "", "");
        assert!(objective.contains("able to apply key concepts"));
    }
}
