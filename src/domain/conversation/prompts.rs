//! Assistant reply templates for the drafting dialogue.

/// Opening message of every conversation.
pub const GREETING: &str =
    "Hi! I'm your Learning Objectives Assistant. What subject or skill are you creating learning objectives for?";

/// Marker preceding a finalized objective in a reply.
///
/// Collaborators that only see reply text split on this exact string.
pub const OBJECTIVE_MARKER: &str = "Here's a possible learning objective:";

/// Acknowledges the subject and asks for the target level.
pub fn subject_capture(subject: &str) -> String {
    format!(
        "Thanks for sharing about {}! Learning objectives should focus on what students will be \
         able to do after the learning experience. {}",
        subject.trim(),
        LEVEL_QUESTION
    )
}

const LEVEL_QUESTION: &str = "What level of learning are you targeting? For example:
- Remember/recall information
- Understand/explain concepts
- Apply knowledge to new situations
- Analyze information
- Evaluate ideas
- Create new content or perspectives";

/// Asks how mastery will be observed.
pub const MEASUREMENT_QUESTION: &str = "Great! Now let's think about how you'll measure success. \
     What specific, observable actions will show that students have achieved this objective? \
     For example, will they be able to define, explain, solve, compare, design, etc.?";

/// Offers a fill-in-the-blank framework built around `verb`.
pub fn template_proposal(subject: &str, verb: &str) -> String {
    format!(
        "Excellent! Based on our conversation, let me suggest a learning objective framework:\n\n\
         'After completing this [learning experience], students will be able to {verb} [specific content] \
         [optional: condition] [optional: criteria].'\n\n\
         Would you like to fill in this template for your {subject} objective? Or I can suggest one for you.",
        verb = verb,
        subject = subject.trim(),
    )
}

/// Presents a finalized objective on its own line, between the marker and
/// a follow-up question.
pub fn objective_suggestion(objective: &str, subject: &str) -> String {
    format!(
        "{}\n\n{}\n\nWhat do you think? Would you like to refine this further, or would you prefer \
         to create another objective for a different aspect of {}?",
        OBJECTIVE_MARKER,
        objective,
        subject.trim()
    )
}

/// Lists the ways an objective can be refined.
pub const REFINEMENT_OPTIONS: &str = "Let's refine this objective. Is there anything specific you'd like to change? For example:
- Make it more specific
- Change the level of thinking
- Adjust how it will be measured
- Add conditions or criteria for success";

/// Starts a new objective for the same subject.
pub fn another_objective(subject: &str) -> String {
    format!(
        "Let's create another learning objective for {}. What specific skill or knowledge \
         component would you like to address with this new objective?",
        subject.trim()
    )
}

/// Generic nudge toward well-formed objectives.
pub const SMART_NUDGE: &str = "Thanks for sharing that. To create the most effective learning objective, \
     we should make sure it's SMART (Specific, Measurable, Achievable, Relevant, Time-bound). \
     Would you like to refine the current objective, or should we create another one?";
