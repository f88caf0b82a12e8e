use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::{models::domain::QuestionKind, services::model_gateway::GatewayError};

/// Every way the quiz pipeline can fail. Each kind maps to one fixed detail
/// string that is safe to show to the caller.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("model call failed: {0}")]
    Upstream(#[from] GatewayError),

    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("model output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("quiz payload has no questions list: {0}")]
    InvalidStructure(String),

    #[error("question {index} failed {kind} validation")]
    InvalidQuestion { kind: QuestionKind, index: usize },

    #[error("unexpected quiz failure: {0}")]
    Unexpected(String),
}

impl QuizError {
    pub fn detail(&self) -> &'static str {
        match self {
            QuizError::Upstream(_) => "AI service request failed",
            QuizError::NoJsonObject | QuizError::InvalidJson(_) => "AI returned invalid JSON",
            QuizError::InvalidStructure(_) => "AI returned invalid quiz structure",
            QuizError::InvalidQuestion { kind, .. } => match kind {
                QuestionKind::Flashcard => "AI generated empty flashcard",
                QuestionKind::Qa => "AI generated empty QA",
                QuestionKind::Mcq => "AI generated invalid MCQ",
            },
            QuizError::Unexpected(_) => "AI quiz generation failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("Summarization failed: {0}")]
    SummarizationFailed(GatewayError),

    #[error("Tutoring failed: {0}")]
    TutoringFailed(GatewayError),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::Quiz(_) => "QUIZ_GENERATION_ERROR",
            AppError::SummarizationFailed(_) => "SUMMARIZATION_ERROR",
            AppError::TutoringFailed(_) => "TUTORING_ERROR",
        }
    }

    /// The message sent to the caller. Server-side causes never leak past
    /// this point; they are logged where the error is raised.
    pub fn public_detail(&self) -> String {
        match self {
            AppError::Quiz(err) => err.detail().to_string(),
            AppError::SummarizationFailed(_) => "AI summarization failed".to_string(),
            AppError::TutoringFailed(_) => "AI tutoring failed".to_string(),
            AppError::ConfigError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_)
            | AppError::Quiz(_)
            | AppError::SummarizationFailed(_)
            | AppError::TutoringFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_detail(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
