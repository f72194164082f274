//! Error types for the portal crate.

/// Portal-level errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
