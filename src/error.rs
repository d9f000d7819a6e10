use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("environment variable {name}: {source}")]
    EnvVar {
        name: &'static str,
        source: std::env::VarError,
    },

    #[error("environment variable {name} has unparseable value {value:?}")]
    EnvParse {
        name: &'static str,
        value: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, AppError>;
