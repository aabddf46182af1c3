use thiserror::Error;

/// Why a single attempt was classified as a failure.
///
/// These never leave the dispatcher as fatal errors; they only feed the
/// error counter and the attempt observer.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("Invalid HTTP method '{method}': {source}")]
    InvalidMethod {
        method: String,
        #[source]
        source: ::http::method::InvalidMethod,
    },
    #[error("Failed to build request: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Server responded with status {status}.")]
    Status { status: u16 },
    #[error("Attempt task aborted: {source}")]
    Aborted {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl AttemptError {
    /// Construction failures happen before anything is sent on the wire.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidMethod { .. } | Self::Build { .. })
    }

    /// Whether the failure is worth a log line of its own; error statuses
    /// are only counted.
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        !matches!(self, Self::Status { .. })
    }
}
