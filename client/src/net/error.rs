//! Error type shared by REST helpers.

/// Failure of a backend call.
///
/// `Status` is the only variant carrying an application-level answer; the
/// others mean the request never produced a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}
