//! Mock provider implementation for testing.

use super::{ChatProvider, ProviderError};
use crate::models::ChatCompletionRequest;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Canned outcome returned by [`MockChatProvider`].
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Body(Value),
    Status(StatusCode, String),
    NetworkFailure(String),
}

/// Records every request it receives and answers with a fixed outcome.
pub struct MockChatProvider {
    configured: bool,
    outcome: MockOutcome,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockChatProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            configured: true,
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(content: &str) -> Self {
        Self::new(MockOutcome::Body(json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })))
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying("unused")
        }
    }

    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> Result<Value, ProviderError> {
        if !self.configured {
            return Err(ProviderError::NotConfigured("mock".to_string()));
        }

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.outcome {
            MockOutcome::Body(body) => Ok(body.clone()),
            MockOutcome::Status(status, body) => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            MockOutcome::NetworkFailure(message) => Err(ProviderError::Network(message.clone())),
        }
    }
}
