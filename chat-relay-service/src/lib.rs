pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use config::RelayConfig;
use services::ChatProvider;
use std::sync::Arc;

/// Shared, read-only application state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub provider: Arc<dyn ChatProvider>,
}

impl AppState {
    pub fn new(config: RelayConfig, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
