// --- File: backend/src/main.rs ---

use anyhow::Context;
use backend::{
    config::AppConfig,
    db, mailer,
    store::Store,
    web_server::{run_server, AppState},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Setup ---
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    let db_pool = db::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    db::migrate(&db_pool).await?;

    let mailer = mailer::from_config(&config.mail)?;
    let app_state = AppState::new(Store::new(db_pool), config, mailer)?;

    // --- Run Server ---
    tracing::info!("Initializing server...");
    run_server(app_state).await
}
