use crate::{
    constants::prompts::{
        CODE_NOTE_DIRECTIVES, QUIZ_SYSTEM_PROMPT, SUMMARIZE_SYSTEM_PROMPT, TUTOR_SYSTEM_PROMPT,
    },
    services::content_classifier::ContentKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Number of questions to ask for, scaled to the (already truncated) note.
pub fn suggested_question_count(note: &str) -> usize {
    match note.chars().count() {
        0..=500 => 3,
        501..=2000 => 5,
        _ => 8,
    }
}

/// Assembles the quiz prompt. The note is embedded verbatim.
pub fn build_quiz_prompt(note: &str, kind: ContentKind) -> PromptPair {
    let mut user = format!(
        "Write {} quiz questions from these study notes.\n\nNotes:\n{}",
        suggested_question_count(note),
        note
    );

    if kind.is_code_heavy() {
        user.push_str("\n\n");
        user.push_str(CODE_NOTE_DIRECTIVES);
    }

    PromptPair {
        system: QUIZ_SYSTEM_PROMPT.to_string(),
        user,
    }
}

pub fn build_summary_prompt(text: &str) -> PromptPair {
    PromptPair {
        system: SUMMARIZE_SYSTEM_PROMPT.to_string(),
        user: text.to_string(),
    }
}

pub fn build_tutor_prompt(note: &str, question: &str) -> PromptPair {
    PromptPair {
        system: TUTOR_SYSTEM_PROMPT.to_string(),
        user: format!("Notes:\n{}\n\nQuestion:\n{}", note, question),
    }
}
