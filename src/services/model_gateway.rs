use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("model call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<OpenAIError> for GatewayError {
    fn from(err: OpenAIError) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

/// A single call to the language-model service. Implementations return the
/// model's text as-is; callers treat it as untrusted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        user_content: &str,
        model_id: &str,
    ) -> Result<String, GatewayError>;
}

/// Chat-completions gateway for any OpenAI-compatible endpoint (OpenRouter by
/// default).
pub struct OpenRouterGateway {
    client: Client<OpenAIConfig>,
}

impl OpenRouterGateway {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.model_api_base.clone())
            .with_api_key(config.model_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletion {
    /// First choice's content. A reply without one is empty text, left for
    /// the caller to reject like any other unusable output.
    fn into_text(self) -> String {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        text.unwrap_or_else(|| {
            log::warn!("Model reply carried no message content");
            String::new()
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ModelGateway for OpenRouterGateway {
    async fn generate(
        &self,
        system_instruction: &str,
        user_content: &str,
        model_id: &str,
    ) -> Result<String, GatewayError> {
        let request = json!({
            "model": model_id,
            "messages": [
                {"role": "system", "content": system_instruction},
                {"role": "user", "content": user_content}
            ]
        });

        let completion: ChatCompletion = self.client.chat().create_byot(request).await?;

        Ok(completion.into_text())
    }
}

/// Configuration-bound handle to the model service. Built once at startup and
/// shared read-only by every request.
#[derive(Clone)]
pub struct ModelClient {
    gateway: Arc<dyn ModelGateway>,
    model_id: String,
    timeout: Duration,
}

impl ModelClient {
    pub fn new(gateway: Arc<dyn ModelGateway>, model_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            gateway,
            model_id: model_id.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(OpenRouterGateway::new(config)),
            config.model_id.clone(),
            config.model_timeout(),
        )
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Runs one model call under the configured timeout. On expiry the
    /// in-flight request future is dropped, which cancels it.
    pub async fn generate(
        &self,
        system_instruction: &str,
        user_content: &str,
    ) -> Result<String, GatewayError> {
        log::debug!(
            "Calling model {} with {} chars of user content",
            self.model_id,
            user_content.chars().count()
        );

        match tokio::time::timeout(
            self.timeout,
            self.gateway
                .generate(system_instruction, user_content, &self.model_id),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                log::warn!("Model {} timed out after {:?}", self.model_id, self.timeout);
                Err(GatewayError::Timeout(self.timeout))
            }
        }
    }
}
