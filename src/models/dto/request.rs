use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const MIN_TUTOR_NOTE_CHARS: usize = 20;
pub const MIN_TUTOR_QUESTION_CHARS: usize = 5;

/// Quiz requests carry no validation rules: short notes short-circuit to an
/// empty quiz instead of being rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TutorRequest {
    #[validate(custom(function = "validate_tutor_note"))]
    pub note: String,

    #[validate(custom(function = "validate_tutor_question"))]
    pub question: String,
}

fn trimmed_len_at_least(value: &str, min: usize, code: &'static str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        let mut err = ValidationError::new(code);
        err.message = Some(format!("must be at least {} characters", min).into());
        return Err(err);
    }
    Ok(())
}

fn validate_tutor_note(note: &str) -> Result<(), ValidationError> {
    trimmed_len_at_least(note, MIN_TUTOR_NOTE_CHARS, "note_too_short")
}

fn validate_tutor_question(question: &str) -> Result<(), ValidationError> {
    trimmed_len_at_least(question, MIN_TUTOR_QUESTION_CHARS, "question_too_short")
}
