use std::fmt;

use thiserror::Error;

use crate::{PayloadError, PersistError};

/// Failure of a generation call. `Display` is what ends up after `Ошибка: ` in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateError {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerateError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<PayloadError> for GenerateError {
    fn from(err: PayloadError) -> Self {
        GenerateError::new(FailureKind::InvalidPayload, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidResponse,
    InvalidPayload,
    Backend,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid generator endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "HTTP status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidResponse => write!(f, "invalid generator response"),
            FailureKind::InvalidPayload => write!(f, "invalid document payload"),
            FailureKind::Backend => write!(f, "generator error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("background write failed: {0}")]
    Join(String),
}
