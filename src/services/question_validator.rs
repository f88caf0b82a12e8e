use serde_json::{Map, Value};

use crate::{
    errors::QuizError,
    models::domain::{Question, QuestionKind, QuizItem},
};

const MIN_MCQ_OPTIONS: usize = 2;

fn non_empty_string(record: &Map<String, Value>, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_options(record: &Map<String, Value>) -> Option<Vec<String>> {
    let options = record
        .get("options")?
        .as_array()?
        .iter()
        .map(|option| option.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()?;

    (options.len() >= MIN_MCQ_OPTIONS).then_some(options)
}

fn typed_question(kind: QuestionKind, record: &Map<String, Value>) -> Option<Question> {
    match kind {
        QuestionKind::Qa => Some(Question::Qa {
            question: non_empty_string(record, "question")?,
            answer: non_empty_string(record, "answer")?,
        }),
        QuestionKind::Flashcard => Some(Question::Flashcard {
            front: non_empty_string(record, "front")?,
            back: non_empty_string(record, "back")?,
        }),
        QuestionKind::Mcq => Some(Question::Mcq {
            question: non_empty_string(record, "question")?,
            options: string_options(record)?,
            answer: non_empty_string(record, "answer")?,
        }),
    }
}

/// Checks one normalized record against its variant's rule. Records whose
/// `type` is missing or unknown are passed through unchecked.
pub fn validate_question(index: usize, record: Map<String, Value>) -> Result<QuizItem, QuizError> {
    let kind = record
        .get("type")
        .and_then(Value::as_str)
        .and_then(QuestionKind::from_tag);

    let Some(kind) = kind else {
        log::debug!("Question {} has no recognized type, passing through", index);
        return Ok(QuizItem::Unrecognized(record));
    };

    typed_question(kind, &record)
        .map(QuizItem::Known)
        .ok_or(QuizError::InvalidQuestion { kind, index })
}

/// Validates records in order and stops at the first failure. On success the
/// output has exactly one item per input record.
pub fn validate_questions(records: Vec<Map<String, Value>>) -> Result<Vec<QuizItem>, QuizError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_question(index, record))
        .collect()
}
