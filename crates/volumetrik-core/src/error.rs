/// Error taxonomy shared by the scan session, settings, and layout layers.
///
/// Cancellation is not modelled as a failure outside the
/// service boundary: the session turns [`ServiceError::Cancelled`] into a
/// cancellation event and never surfaces it as an error notice.
use thiserror::Error;

/// A request to a [`crate::service::DashboardService`] did not produce a result.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller cancelled the request; the result must not be applied.
    #[error("request cancelled")]
    Cancelled,

    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The remote side answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// Local filesystem failure while scanning or persisting.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A response or document could not be decoded.
    #[error("invalid data: {0}")]
    Decode(String),

    /// The background worker died before reporting a result.
    #[error("scan worker failed: {0}")]
    Worker(String),
}

impl ServiceError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Remote {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// User input rejected before any state was touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("path must not be empty")]
    EmptyPath,

    #[error("threshold must be a finite number")]
    InvalidThreshold,

    #[error("path is already monitored: {0}")]
    DuplicatePath(String),

    #[error("no monitored path at index {0}")]
    NoSuchRule(usize),
}

/// A save was rejected by the service. Local edits are kept.
#[derive(Debug, Error)]
#[error("failed to persist {what}: {source}")]
pub struct PersistenceError {
    pub what: &'static str,
    #[source]
    pub source: ServiceError,
}

impl PersistenceError {
    pub fn settings(source: ServiceError) -> Self {
        Self {
            what: "settings",
            source,
        }
    }

    pub fn layout(source: ServiceError) -> Self {
        Self {
            what: "layout",
            source,
        }
    }
}
