use std::fmt;

/// Errors produced at the upstream fetch boundary.
///
/// Every network-layer failure is caught at its operation boundary (page
/// fetch, detail fetch, evolution lookup) and either converted to a
/// UI-visible state or degraded silently; none escape uncaught.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure before a response arrived
    Network(String),
    /// Upstream answered with a non-success status
    Status(u16),
    /// The requested resource does not exist upstream
    NotFound,
    /// Response body or resource URL did not match the upstream contract
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(details) => write!(f, "Network error: {}", details),
            FetchError::Status(code) => write!(f, "Upstream returned status {}", code),
            FetchError::NotFound => write!(f, "Resource not found"),
            FetchError::Malformed(details) => write!(f, "Malformed upstream data: {}", details),
        }
    }
}

impl std::error::Error for FetchError {}

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;
