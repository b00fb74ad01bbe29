pub mod chat;

pub use chat::{
    extract_reply, preview, ChatCompletionRequest, ConversationRequest, Message, RelayResponse,
    FALLBACK_REPLY, REPLY_PREVIEW_CHARS,
};
