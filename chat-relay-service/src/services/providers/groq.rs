//! Groq (OpenAI compatible) chat-completions provider.

use super::{ChatProvider, ProviderError};
use crate::config::UpstreamConfig;
use crate::models::ChatCompletionRequest;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::time::Duration;

pub struct GroqProvider {
    client: Client,
    url: String,
    api_key: Option<Secret<String>>,
}

impl GroqProvider {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> Result<Value, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::NotConfigured("GROQ_API_KEY".to_string()))?;

        tracing::info!(
            model = %request.model,
            message_count = request.messages.len(),
            "Sending request to upstream chat API"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Upstream response received");

        // Text first so that non-JSON error bodies survive as detail
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Upstream { status, body });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}
