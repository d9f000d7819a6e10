//! Startup migration runner. Run once at deployment, before the serving
//! processes start: loads and validates configuration, then brings the
//! database schema up to date. Exits nonzero on the first failure.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_backend::{Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting {} v{}", config.app_name, config.app_version);
    tracing::info!("Environment: {}", config.environment);

    // Initialize database
    let db = Database::new(&config).await?;

    // Run migrations
    tracing::info!("Running database migrations...");
    db.run_migrations().await?;
    db.ping().await?;

    tracing::info!("Database schema is up to date");

    Ok(())
}
