use thiserror::Error;

/// Failure of one API call. `Network` means the fetch itself rejected
/// (offline, DNS, CORS); `Http` carries the backend's status and message,
/// and also covers 2xx responses whose body was not the expected JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) => None,
            ApiError::Http { status, .. } => Some(*status),
        }
    }
}
