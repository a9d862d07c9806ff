/// Errors surfaced by the registry outside of form-level validation.
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    /// failed to prepare the data directory or database file
    #[error("failed to prepare the database file: {0}")]
    DataDir(#[from] std::io::Error),
    /// query or constraint failure reported by the database
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// schema migration failure
    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    /// missing or unusable configuration, e.g. DATABASE_URL
    #[error("invalid configuration: {0}")]
    Config(String),
}
