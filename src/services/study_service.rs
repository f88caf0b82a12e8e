use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::TutorRequest,
    services::{
        model_gateway::ModelClient,
        prompt_builder::{build_summary_prompt, build_tutor_prompt},
    },
};

pub const MIN_SUMMARY_CHARS: usize = 50;

/// Summaries and tutoring answers: prompt, forward, return the model's text.
pub struct StudyService {
    model: ModelClient,
}

impl StudyService {
    pub fn new(model: ModelClient) -> Self {
        Self { model }
    }

    /// Text too short to summarize is returned as its own summary.
    pub async fn summarize(&self, text: &str) -> AppResult<String> {
        let text = text.trim();

        if text.chars().count() < MIN_SUMMARY_CHARS {
            return Ok(text.to_string());
        }

        let prompt = build_summary_prompt(text);
        let summary = self
            .model
            .generate(&prompt.system, &prompt.user)
            .await
            .map_err(AppError::SummarizationFailed)?;

        Ok(summary.trim().to_string())
    }

    pub async fn tutor(&self, request: &TutorRequest) -> AppResult<String> {
        request.validate()?;

        let prompt = build_tutor_prompt(request.note.trim(), request.question.trim());
        let answer = self
            .model
            .generate(&prompt.system, &prompt.user)
            .await
            .map_err(AppError::TutoringFailed)?;

        Ok(answer.trim().to_string())
    }
}
