use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream {
        status: StatusCode,
        message: String,
        detail: String,
    },

    #[error("Transport error: {message}: {detail}")]
    Transport { message: String, detail: String },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            detail: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::ConfigError(_) | AppError::Transport { .. } | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error, detail) = match self {
            AppError::BadRequest { message, detail } => (message, detail),
            AppError::ConfigError(message) => (message, None),
            AppError::Upstream {
                message, detail, ..
            } => (message, Some(detail)),
            AppError::Transport { message, detail } => (message, Some(detail)),
            AppError::InternalError(err) => (
                "Internal server error".to_string(),
                Some(format!("{:#}", err)),
            ),
        };

        (status, Json(ErrorResponse { error, detail })).into_response()
    }
}
