//! Error types for the bridge crate.

/// Bridge-level errors.
///
/// Application-level refusals (the host answering with a non-empty message)
/// are not errors; they surface as [`crate::InstallOutcome::Rejected`]. This
/// enum covers the transport tier only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host bridge object is not present in this context.
    #[error("host bridge is not available")]
    HostUnavailable,

    /// The host accepted the call but rejected it. The host's own error is
    /// not preserved; only the handler name is carried.
    #[error("handler \"{handler}\" failed")]
    HandlerFailed { handler: String },

    /// Dispatching the call to the host faulted before a reply was produced.
    #[error("dispatch error: {0}")]
    Dispatch(String),

    /// Error reading or writing the token store.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Error serializing/deserializing stored data.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
