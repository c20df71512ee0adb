use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the client can surface. Nothing is recovered locally:
/// the first error aborts the call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("request cancelled")]
    Cancelled,

    #[error("unexpected status code {code} from {url}")]
    Status { code: u16, url: String },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("malformed {context}: {reason}")]
    Format { context: String, reason: String },

    #[error("failed to decode {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema violation: {0}")]
    Schema(String),
}

/// Coarse classification so callers can tell transport trouble from a bad payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Status,
    Format,
    Schema,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Transport { .. } | Error::Cancelled | Error::Body { .. } => ErrorKind::Transport,
            Error::Status { .. } => ErrorKind::Status,
            Error::Format { .. } | Error::Json { .. } => ErrorKind::Format,
            Error::Schema(_) => ErrorKind::Schema,
        }
    }

    /// HTTP status carried by a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self.kind(), ErrorKind::Format | ErrorKind::Schema)
    }

    pub(crate) fn format(context: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Format {
            context: context.into(),
            reason: reason.to_string(),
        }
    }
}
