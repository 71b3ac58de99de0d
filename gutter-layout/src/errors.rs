use thiserror::Error;

/// Errors emitted while reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference store JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors emitted while loading layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("layout config IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid breakpoints: {0}")]
    InvalidBreakpoints(String),
}
