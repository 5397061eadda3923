//! Example objectives shown alongside the conversation.

use serde::Serialize;

use super::BloomsLevel;

/// A labeled group of example objectives for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleCategory {
    pub level: BloomsLevel,
    pub label: &'static str,
    pub objectives: [&'static str; 3],
}

const SAMPLE_CATEGORIES: [SampleCategory; 6] = [
    SampleCategory {
        level: BloomsLevel::Remember,
        label: "Knowledge/Remember",
        objectives: [
            "Define the key terms related to photosynthesis.",
            "List the main components of a computer system.",
            "Identify the major periods of art history.",
        ],
    },
    SampleCategory {
        level: BloomsLevel::Understand,
        label: "Comprehension/Understand",
        objectives: [
            "Explain the process of cellular respiration.",
            "Summarize the plot of Shakespeare's Hamlet.",
            "Describe the functions of the three branches of government.",
        ],
    },
    SampleCategory {
        level: BloomsLevel::Apply,
        label: "Application/Apply",
        objectives: [
            "Calculate the area of irregular shapes using calculus.",
            "Implement a sorting algorithm in Python.",
            "Apply the principles of color theory in a digital composition.",
        ],
    },
    SampleCategory {
        level: BloomsLevel::Analyze,
        label: "Analysis/Analyze",
        objectives: [
            "Compare and contrast classical and operant conditioning.",
            "Analyze the causes and effects of climate change.",
            "Differentiate between leadership and management strategies.",
        ],
    },
    SampleCategory {
        level: BloomsLevel::Evaluate,
        label: "Evaluation/Evaluate",
        objectives: [
            "Critique a peer's research paper using established criteria.",
            "Evaluate the effectiveness of public health campaigns.",
            "Assess the validity of historical sources.",
        ],
    },
    SampleCategory {
        level: BloomsLevel::Create,
        label: "Creation/Create",
        objectives: [
            "Design an experiment to test the effect of light on plant growth.",
            "Develop a marketing strategy for a new product.",
            "Compose a musical piece that incorporates at least three different scales.",
        ],
    },
];

/// Returns the six example categories in level order.
pub fn sample_objectives() -> &'static [SampleCategory] {
    &SAMPLE_CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::analyze_objective;

    #[test]
    fn one_category_per_level_in_order() {
        let levels: Vec<_> = sample_objectives().iter().map(|c| c.level).collect();
        assert_eq!(levels, BloomsLevel::ALL.to_vec());
    }

    #[test]
    fn labels_match_level_category_labels() {
        for category in sample_objectives() {
            assert_eq!(category.label, category.level.category_label());
        }
    }

    #[test]
    fn creation_label_for_top_level() {
        assert_eq!(sample_objectives()[5].label, "Creation/Create");
    }

    #[test]
    fn evaluate_examples_analyze_as_evaluate() {
        let evaluate = &sample_objectives()[4];
        for objective in evaluate.objectives {
            let analysis = analyze_objective(objective);
            assert_eq!(analysis.blooms_level, Some(BloomsLevel::Evaluate), "{objective}");
            assert!(analysis.measurable);
        }
    }

    #[test]
    fn develop_example_analyzes_as_create() {
        let analysis = analyze_objective("Develop a marketing strategy for a new product.");
        assert_eq!(analysis.blooms_level, Some(BloomsLevel::Create));
    }

    #[test]
    fn verbs_outside_the_table_are_not_measurable() {
        for objective in [
            "Calculate the area of irregular shapes using calculus.",
            "Implement a sorting algorithm in Python.",
        ] {
            assert!(sample_objectives()[2].objectives.contains(&objective));
            assert!(!analyze_objective(objective).measurable, "{objective}");
        }
    }
}
