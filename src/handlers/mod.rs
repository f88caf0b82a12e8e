pub mod health_handler;
pub mod quiz_handler;
pub mod study_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use quiz_handler::generate_quiz;
pub use study_handler::{summarize, tutor};

/// Registers every route. `/quiz` and `/tutor` carry the shared-secret check
/// on their own resources; `/summarize` and `/health` are open.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(health_check)
    .service(generate_quiz)
    .service(summarize)
    .service(tutor);
}
