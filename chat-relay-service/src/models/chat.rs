use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Reply text used when the upstream answer carries no content.
pub const FALLBACK_REPLY: &str = "🤖 Không có phản hồi từ AI.";

/// Maximum number of characters of a reply written to the logs.
pub const REPLY_PREVIEW_CHARS: usize = 200;

/// The fixed prompt message placed ahead of every conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

impl From<Message> for Value {
    fn from(message: Message) -> Self {
        json!({ "role": message.role, "content": message.content })
    }
}

/// Caller history. Entries are opaque and forwarded exactly as received.
#[derive(Debug, Clone)]
pub struct ConversationRequest {
    pub messages: Vec<Value>,
}

/// Payload sent to the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Value>,
}

impl ChatCompletionRequest {
    /// The system prompt always leads; caller messages keep their order.
    pub fn new(model: impl Into<String>, system_prompt: &str, messages: Vec<Value>) -> Self {
        let mut combined = Vec::with_capacity(messages.len() + 1);
        combined.push(Value::from(Message::system(system_prompt)));
        combined.extend(messages);

        Self {
            model: model.into(),
            messages: combined,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub response: String,
}

/// Pull `choices[0].message.content` out of an upstream body, falling back
/// to [`FALLBACK_REPLY`] when it is missing, null, not a string or empty.
pub fn extract_reply(body: &Value) -> String {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
