use actix_web::{get, HttpResponse};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "AI service running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
