pub mod providers;

pub use providers::{groq::GroqProvider, ChatProvider, ProviderError};
