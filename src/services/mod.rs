pub mod content_classifier;
pub mod json_extractor;
pub mod model_gateway;
pub mod prompt_builder;
pub mod question_normalizer;
pub mod question_validator;
pub mod quiz_service;
pub mod study_service;
