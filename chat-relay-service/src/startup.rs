//! Router construction and server lifecycle.

use crate::config::RelayConfig;
use crate::handlers::{app::health_check, chat::chat};
use crate::services::{ChatProvider, GroqProvider};
use crate::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let index = ServeFile::new(state.config.static_files.index_path());
    let assets = ServeDir::new(&state.config.static_files.dir);
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .route_service("/", index)
        .fallback_service(assets)
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Allow-listed origins, GET/POST, Content-Type and Authorization.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins.iter().filter_map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the HTTP backed upstream provider.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let provider = GroqProvider::new(&config.upstream)
            .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

        if config.upstream.api_key.is_none() {
            tracing::warn!("GROQ_API_KEY is not set; chat requests will fail until it is");
        }

        tracing::info!(
            upstream = %config.upstream.url,
            model = %config.upstream.model,
            timeout_secs = config.upstream.timeout_secs,
            "Initialized upstream chat provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    pub async fn build_with_provider(
        config: RelayConfig,
        provider: Arc<dyn ChatProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for tests
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Chat relay listening on http://localhost:{}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, provider),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
