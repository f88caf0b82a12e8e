use std::{any::Any, panic::AssertUnwindSafe};

use futures::FutureExt;
use serde_json::{Map, Value};

use crate::{
    errors::QuizError,
    models::domain::QuizItem,
    services::{
        content_classifier::ContentKind,
        json_extractor::extract_json_object,
        model_gateway::ModelClient,
        prompt_builder::build_quiz_prompt,
        question_normalizer::normalize_question,
        question_validator::validate_questions,
    },
};

pub const MIN_QUIZ_NOTE_CHARS: usize = 100;
pub const MAX_QUIZ_NOTE_CHARS: usize = 4000;

/// Trims the note and cuts it to `MAX_QUIZ_NOTE_CHARS` characters. Returns
/// `None` when the trimmed note is too short to quiz on.
pub fn prepare_note(note: &str) -> Option<&str> {
    let trimmed = note.trim();

    if trimmed.chars().count() < MIN_QUIZ_NOTE_CHARS {
        return None;
    }

    let truncated = match trimmed.char_indices().nth(MAX_QUIZ_NOTE_CHARS) {
        Some((byte_end, _)) => &trimmed[..byte_end],
        None => trimmed,
    };

    Some(truncated)
}

fn question_records(payload: Value) -> Result<Vec<Map<String, Value>>, QuizError> {
    let questions = match payload {
        Value::Object(mut object) => object.remove("questions"),
        other => {
            return Err(QuizError::InvalidStructure(format!(
                "expected an object, got {}",
                other
            )))
        }
    };

    let Some(Value::Array(questions)) = questions else {
        return Err(QuizError::InvalidStructure(
            "`questions` is missing or not a list".to_string(),
        ));
    };

    questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| match question {
            Value::Object(record) => Ok(record),
            _ => Err(QuizError::InvalidStructure(format!(
                "question {} is not an object",
                index
            ))),
        })
        .collect()
}

/// Turns raw model output into validated quiz items.
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizItem>, QuizError> {
    let payload = extract_json_object(raw)?;
    let records = question_records(payload)?;

    validate_questions(records.into_iter().map(normalize_question).collect())
}

pub struct QuizService {
    model: ModelClient,
}

impl QuizService {
    pub fn new(model: ModelClient) -> Self {
        Self { model }
    }

    /// Runs the whole quiz pipeline for one note. Short notes yield an empty
    /// quiz without calling the model. A panic anywhere in the pipeline is
    /// reported as `QuizError::Unexpected`.
    pub async fn generate_quiz(&self, note: &str) -> Result<Vec<QuizItem>, QuizError> {
        AssertUnwindSafe(self.run_pipeline(note))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(QuizError::Unexpected(panic_message(&*panic))))
    }

    async fn run_pipeline(&self, note: &str) -> Result<Vec<QuizItem>, QuizError> {
        let Some(note) = prepare_note(note) else {
            log::info!("Note too short for a quiz, skipping model call");
            return Ok(Vec::new());
        };

        let kind = ContentKind::classify(note);
        let prompt = build_quiz_prompt(note, kind);
        log::info!(
            "Generating quiz for {} char note ({:?})",
            note.chars().count(),
            kind
        );

        let raw = self.model.generate(&prompt.system, &prompt.user).await?;
        let questions = parse_quiz(&raw)?;

        log::info!("Generated quiz with {} questions", questions.len());
        Ok(questions)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic without message".to_string())
}
