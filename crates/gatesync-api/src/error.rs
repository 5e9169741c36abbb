use thiserror::Error;

/// Top-level error type for the `gatesync-api` crate.
///
/// Covers every failure mode of the consumed remote surfaces: the API
/// Gateway control plane and the S3 object fetch. `gatesync-core` translates
/// these into its reconciliation error taxonomy at the orchestrator boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    // ── Control plane, caller's fault ───────────────────────────────
    /// The addressed resource does not exist.
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Request rejected as malformed.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Caller is not authorized for this operation.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Remote state conflicts with the requested change.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Account or resource limit exceeded.
    #[error("Limit exceeded: {message}")]
    LimitExceeded { message: String },

    /// Throttled by the remote service.
    #[error("Too many requests: {message}")]
    TooManyRequests { message: String },

    // ── Control plane, service's fault ──────────────────────────────
    /// Any other service-side error (HTTP 5xx or unclassified 4xx).
    #[error("Service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL construction failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl ApiError {
    /// Returns `true` if the addressed resource does not exist remotely.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if the caller must fix its input before retrying.
    ///
    /// Client-side transport failures count as caller faults: the request
    /// never reached the service, so resending it unchanged cannot help.
    pub fn is_caller_fault(&self) -> bool {
        match self {
            Self::BadRequest { .. }
            | Self::Unauthorized { .. }
            | Self::Conflict { .. }
            | Self::LimitExceeded { .. }
            | Self::TooManyRequests { .. } => true,
            Self::Transport(e) => !e.is_status(),
            _ => false,
        }
    }
}
