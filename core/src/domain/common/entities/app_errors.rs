use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("internal server error")]
    InternalServerError,

    #[error("resource not found")]
    NotFound,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Missing {0}")]
    MissingCredential(&'static str),

    /// Upstream provider failure. `detail` carries the raw response text
    /// so callers can surface it verbatim.
    #[error("{provider} error: {detail}")]
    Provider {
        provider: &'static str,
        detail: String,
    },

    #[error("object storage error: {0}")]
    ObjectStorage(String),
}
