pub mod question;

pub use question::{Question, QuestionKind, QuizItem};
