use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::InternalSecretAuth,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{SummarizeRequest, TutorRequest},
        response::{SummaryResponse, TutorResponse},
    },
};

fn log_failure(req: &HttpRequest, action: &str, err: &AppError) {
    match err {
        AppError::ValidationError(_) => {
            log::info!("[{}] {} rejected: {}", get_request_id(req), action, err)
        }
        _ => log::error!("[{}] {} failed: {}", get_request_id(req), action, err),
    }
}

#[post("/summarize")]
pub async fn summarize(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SummarizeRequest>,
) -> Result<HttpResponse, AppError> {
    let summary = state
        .study_service
        .summarize(&request.text)
        .await
        .inspect_err(|e| log_failure(&req, "Summarization", e))?;

    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}

#[post("/tutor", wrap = "InternalSecretAuth")]
pub async fn tutor(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<TutorRequest>,
) -> Result<HttpResponse, AppError> {
    let answer = state
        .study_service
        .tutor(&request)
        .await
        .inspect_err(|e| log_failure(&req, "Tutoring", e))?;

    Ok(HttpResponse::Ok().json(TutorResponse { answer }))
}
