use backend::{
    config::AppConfig,
    db,
    seed::{seed_database, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME},
    store::Store,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reset the portfolio database to its default content.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Username of the admin account to create
    #[arg(long, default_value = DEFAULT_ADMIN_USERNAME)]
    username: String,

    /// Password of the admin account to create
    #[arg(long, default_value = DEFAULT_ADMIN_PASSWORD)]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let args = Args::parse();
    let config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    let db_pool = db::connect(&config.database).await?;
    db::migrate(&db_pool).await?;
    tracing::info!("Database connected for seeding: {}", config.database.url);

    let summary = seed_database(&Store::new(db_pool), &args.username, &args.password)
        .await
        .map_err(|e| anyhow::anyhow!("seeding failed: {e}"))?;

    tracing::info!(?summary, "Data seeded successfully");
    Ok(())
}
