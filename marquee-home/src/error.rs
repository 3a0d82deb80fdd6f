use thiserror::Error;

/// Convenience alias for results of remote API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the remote API collaborators.
///
/// Cloneable so test doubles can replay a configured failure and so callers
/// can hold onto the error after reporting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("No user is signed in")]
    NoCurrentUser,
}
