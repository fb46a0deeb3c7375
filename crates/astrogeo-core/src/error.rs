//! Error types for configuration loading and viewer commands.

/// Invalid configuration record.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Body '{id}' has an invalid size: {size}")]
    InvalidSize { id: String, size: f32 },

    #[error("Body '{id}' has an invalid orbital distance: {distance}")]
    InvalidDistance { id: String, distance: f32 },

    #[error("Body '{id}' has a non-finite {field}")]
    NonFinite { id: String, field: &'static str },

    #[error("Ring of '{id}' must satisfy 0 < inner < outer (got {inner}..{outer})")]
    InvalidRing { id: String, inner: f32, outer: f32 },

    #[error("Duplicate body id: '{0}'")]
    DuplicateId(String),
}

/// Failure to accept a command from the host page.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid command JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Viewer is shutting down")]
    ShuttingDown,
}
