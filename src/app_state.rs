use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_gateway::{ModelClient, ModelGateway},
        quiz_service::QuizService,
        study_service::StudyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub study_service: Arc<StudyService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the state around the OpenAI-compatible model client.
    pub fn new(config: Config) -> Self {
        Self::from_model_client(ModelClient::from_config(&config), config)
    }

    /// Builds the state around any gateway, keeping the configured model id
    /// and timeout.
    pub fn with_gateway(config: Config, gateway: Arc<dyn ModelGateway>) -> Self {
        let model = ModelClient::new(gateway, config.model_id.clone(), config.model_timeout());
        Self::from_model_client(model, config)
    }

    fn from_model_client(model: ModelClient, config: Config) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(model.clone())),
            study_service: Arc::new(StudyService::new(model)),
            config: Arc::new(config),
        }
    }
}
