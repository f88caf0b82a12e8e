use std::{env, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const DEV_INTERNAL_SECRET: &str = "dev_internal_secret_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub model_api_key: SecretString,
    pub model_api_base: String,
    pub model_id: String,
    pub model_timeout_secs: u64,
    pub internal_secret: SecretString,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    /// Reads the process configuration once at startup.
    /// A missing model credential is fatal.
    pub fn from_env() -> AppResult<Self> {
        let model_api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("OPENROUTER_API_KEY is not set".to_string()))?;

        Ok(Self {
            model_api_key: SecretString::from(model_api_key),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            model_id: env::var("MODEL_ID").unwrap_or_else(|_| "google/gemini-2.5-flash".to_string()),
            model_timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            internal_secret: SecretString::from(
                env::var("INTERNAL_API_SECRET").unwrap_or_else(|_| DEV_INTERNAL_SECRET.to_string()),
            ),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        })
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    /// Validate that production-critical configuration is set
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let secret = self.internal_secret.expose_secret();

        if secret == DEV_INTERNAL_SECRET {
            return Err(AppError::ConfigError(
                "INTERNAL_API_SECRET is using the default value".to_string(),
            ));
        }

        if secret.len() < 32 {
            return Err(AppError::ConfigError(format!(
                "INTERNAL_API_SECRET is too short ({}), must be at least 32 characters",
                secret.len()
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            model_api_key: SecretString::from("test-model-key".to_string()),
            model_api_base: "http://127.0.0.1:9/v1".to_string(),
            model_id: "test/model".to_string(),
            model_timeout_secs: 5,
            internal_secret: SecretString::from("test-internal-secret".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
        }
    }
}
