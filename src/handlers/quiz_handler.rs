use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::InternalSecretAuth,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::QuizRequest, response::QuizResponse},
};

#[post("/quiz", wrap = "InternalSecretAuth")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .quiz_service
        .generate_quiz(&request.note)
        .await
        .map_err(|e| {
            log::error!("[{}] Quiz generation failed: {}", get_request_id(&req), e);
            AppError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(QuizResponse { questions }))
}
