//! Chat-completion provider abstraction.
//!
//! The handler only depends on [`ChatProvider`], so tests can swap the HTTP
//! backed [`groq::GroqProvider`] for [`mock::MockChatProvider`].

pub mod groq;
pub mod mock;

use crate::models::ChatCompletionRequest;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Upstream answered with a non-success status; `body` is the raw text.
    #[error("Upstream returned {status}")]
    Upstream { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Whether the credential needed to call upstream is present.
    fn is_configured(&self) -> bool;

    /// Send one completion request and return the parsed JSON body.
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<Value, ProviderError>;
}
