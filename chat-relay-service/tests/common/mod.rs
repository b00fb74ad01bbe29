//! Test helpers for chat-relay-service integration tests.
//!
//! Builds configuration directly (no process environment) and spawns the
//! application on a random port, pointed at a `wiremock` upstream.

#![allow(dead_code)]

use chat_relay_service::config::{
    default_static_dir, CorsConfig, Environment, RelayConfig, StaticFilesConfig, UpstreamConfig,
    DEFAULT_INDEX_FILE, DEFAULT_SYSTEM_PROMPT, DEFAULT_UPSTREAM_MODEL,
};
use chat_relay_service::startup::Application;
use secrecy::Secret;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "gsk-test-key";
pub const UPSTREAM_PATH: &str = "/openai/v1/chat/completions";
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn test_config(upstream_url: &str, api_key: Option<&str>) -> RelayConfig {
    RelayConfig {
        common: service_core::config::Config { port: 0 },
        environment: Environment::Dev,
        log_level: "debug".to_string(),
        upstream: UpstreamConfig {
            url: upstream_url.to_string(),
            model: DEFAULT_UPSTREAM_MODEL.to_string(),
            api_key: api_key.map(|key| Secret::new(key.to_string())),
            timeout_secs: 5,
        },
        cors: CorsConfig {
            allowed_origins: vec![
                ALLOWED_ORIGIN.to_string(),
                "https://chatai-6muk.onrender.com".to_string(),
            ],
        },
        static_files: StaticFilesConfig {
            dir: default_static_dir(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        },
        system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
    }
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn post_chat(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/chat", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_chat_raw(&self, body: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/chat", self.address))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// Spawn the application on a random port with the given configuration.
pub async fn spawn_app_with(config: RelayConfig) -> TestApp {
    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}

/// Spawn the application against `upstream`, with or without a credential.
pub async fn spawn_app(upstream: &MockServer, api_key: Option<&str>) -> TestApp {
    let url = format!("{}{}", upstream.uri(), UPSTREAM_PATH);
    spawn_app_with(test_config(&url, api_key)).await
}
