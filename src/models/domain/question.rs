use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// The three recognized question shapes, discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Qa {
        question: String,
        answer: String,
    },
    Flashcard {
        front: String,
        back: String,
    },
    Mcq {
        question: String,
        options: Vec<String>,
        answer: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Qa,
    Flashcard,
    Mcq,
}

impl QuestionKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "qa" => Some(QuestionKind::Qa),
            "flashcard" => Some(QuestionKind::Flashcard),
            "mcq" => Some(QuestionKind::Mcq),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            QuestionKind::Qa => "qa",
            QuestionKind::Flashcard => "flashcard",
            QuestionKind::Mcq => "mcq",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One entry of a returned quiz. Records whose `type` is not a known variant
/// are passed through as the model produced them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuizItem {
    Known(Question),
    Unrecognized(Map<String, Value>),
}
