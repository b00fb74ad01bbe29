use chat_relay_service::config::RelayConfig;
use chat_relay_service::startup::Application;
use dotenvy::dotenv;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = RelayConfig::load()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    init_tracing("chat-relay-service", &config.log_level);

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await?;

    tracing::info!("Chat relay stopped");
    Ok(())
}
