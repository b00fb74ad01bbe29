use crate::models::{
    extract_reply, preview, ChatCompletionRequest, ConversationRequest, RelayResponse,
    REPLY_PREVIEW_CHARS,
};
use crate::services::ProviderError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

pub const MESSAGES_NOT_ARRAY: &str = "messages phải là một mảng";
pub const MISSING_API_KEY: &str = "Thiếu GROQ_API_KEY trong server";
pub const UPSTREAM_FAILED: &str = "Lỗi từ Groq API";
pub const TRANSPORT_FAILED: &str = "Lỗi server khi gọi Groq";

/// `POST /chat`: prepend the system prompt, forward upstream, relay the reply.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RelayResponse>, AppError> {
    let conversation = parse_conversation(payload)?;

    if !state.provider.is_configured() {
        tracing::error!("GROQ_API_KEY is not configured");
        return Err(AppError::ConfigError(MISSING_API_KEY.to_string()));
    }

    tracing::info!(
        message_count = conversation.messages.len(),
        "Chat request received"
    );

    let request = ChatCompletionRequest::new(
        state.config.upstream.model.as_str(),
        &state.config.system_prompt,
        conversation.messages,
    );

    let body = state
        .provider
        .complete(&request)
        .await
        .map_err(into_app_error)?;

    let reply = extract_reply(&body);
    tracing::info!(
        preview = %preview(&reply, REPLY_PREVIEW_CHARS),
        "Upstream reply relayed"
    );

    Ok(Json(RelayResponse { response: reply }))
}

/// Validate the request body into a [`ConversationRequest`].
///
/// Anything other than a JSON object whose `messages` field is an array is
/// rejected with the same client error. Array entries are not inspected.
pub fn parse_conversation(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ConversationRequest, AppError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Chat request body is not JSON");
            return Err(AppError::bad_request(MESSAGES_NOT_ARRAY));
        }
    };

    let messages = match body {
        Value::Object(mut map) => map.remove("messages"),
        _ => None,
    };

    match messages {
        Some(Value::Array(messages)) => Ok(ConversationRequest { messages }),
        other => {
            tracing::warn!(messages = ?other, "messages is not an array");
            Err(AppError::bad_request(MESSAGES_NOT_ARRAY))
        }
    }
}

fn into_app_error(err: ProviderError) -> AppError {
    match err {
        ProviderError::NotConfigured(key) => {
            tracing::error!(key = %key, "Upstream credential missing");
            AppError::ConfigError(MISSING_API_KEY.to_string())
        }
        ProviderError::Upstream { status, body } => {
            tracing::error!(status = status.as_u16(), detail = %body, "Upstream API returned an error");
            AppError::Upstream {
                status,
                message: UPSTREAM_FAILED.to_string(),
                detail: body,
            }
        }
        ProviderError::Network(detail) | ProviderError::InvalidResponse(detail) => {
            tracing::error!(detail = %detail, "Failed to call upstream API");
            AppError::Transport {
                message: TRANSPORT_FAILED.to_string(),
                detail,
            }
        }
    }
}
