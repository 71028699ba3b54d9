//! Host server errors.

use crate::config::ConfigError;

/// Fatal errors that stop the server from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
