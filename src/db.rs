use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::error::Result;

/// Postgres connection pool plus the embedded schema migrations.
///
/// This crate only guarantees that the schema exists; reading and writing
/// payment rows is the persistence collaborator's job.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Apply the embedded migrations from `./migrations`. Every statement is
    /// idempotent, so this runs on every deployment.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Cheap connectivity check so startup fails before any traffic is
    /// accepted against a half-configured database.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(database_url: &str) -> Config {
        Config {
            debug_mode: false,
            app_name: "Payment Gateway".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "development".to_string(),
            base_url: "https://api.gateway.example".to_string(),
            payment_callback_url: "https://api.gateway.example/api/payment/callback".to_string(),
            bkash_number: "01700000001".to_string(),
            nagad_number: "01700000002".to_string(),
            rocket_number: "01700000003".to_string(),
            upay_number: "01700000004".to_string(),
            encryption_key: "0123456789abcdef0123456789abcdef".to_string(),
            session_lifetime_secs: 3600,
            webhook_secret: "test-webhook".to_string(),
            callback_webhook_secret: "test-webhook".to_string(),
            timezone: "Asia/Dhaka".to_string(),
            database_url: database_url.to_string(),
            database_max_connections: 1,
        }
    }

    #[tokio::test]
    async fn database_new_returns_error_on_invalid_url() {
        let config = test_config("not-a-url");
        let result = Database::new(&config).await;
        assert!(result.is_err());
    }
}
