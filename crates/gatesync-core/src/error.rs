use gatesync_api::ApiError;
use thiserror::Error;

/// Reconciliation error taxonomy.
///
/// Remote-transport errors are translated into these kinds at the
/// orchestrator boundary and propagate to the caller untransformed beyond
/// that translation; the core performs no local recovery or retry.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The remote identifier does not exist.
    #[error("REST API '{id}' not found")]
    NotFound { id: String },

    /// The caller must fix its input: malformed request, authorization
    /// failure, conflicting remote state, or a limit/throttle rejection.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        message: String,
        #[source]
        source: Option<ApiError>,
    },

    /// Any other remote-service-side failure, named by the operation that
    /// raised it.
    #[error("Remote operation {operation} failed")]
    GeneralServiceFailure {
        operation: &'static str,
        #[source]
        source: ApiError,
    },

    /// Local validation failure (conflicting body sources) or a failed
    /// document fetch. Raised before any remote mutating call.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
        #[source]
        source: Option<ApiError>,
    },

    /// A value could not be canonicalized while building a request payload.
    /// A programming/contract error, never retried.
    #[error("Unsupported value type '{type_name}', unable to convert to string")]
    Serialization { type_name: &'static str },
}

impl ReconcileError {
    /// Translate a remote error into the reconciliation taxonomy.
    ///
    /// The single translation path for every control-plane and object-store
    /// call the orchestrator issues.
    pub(crate) fn from_remote(operation: &'static str, resource_id: &str, err: ApiError) -> Self {
        if err.is_not_found() {
            Self::NotFound {
                id: resource_id.to_owned(),
            }
        } else if err.is_caller_fault() {
            Self::InvalidRequest {
                message: err.to_string(),
                source: Some(err),
            }
        } else {
            Self::GeneralServiceFailure {
                operation,
                source: err,
            }
        }
    }

    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_wins_over_operation_name() {
        let err = ReconcileError::from_remote(
            "GetRestApi",
            "api-123",
            ApiError::NotFound {
                message: "gone".into(),
            },
        );
        assert!(matches!(err, ReconcileError::NotFound { id } if id == "api-123"));
    }

    #[test]
    fn caller_faults_become_invalid_request() {
        for err in [
            ApiError::BadRequest { message: "m".into() },
            ApiError::Unauthorized { message: "m".into() },
            ApiError::Conflict { message: "m".into() },
            ApiError::LimitExceeded { message: "m".into() },
            ApiError::TooManyRequests { message: "m".into() },
        ] {
            let translated = ReconcileError::from_remote("UpdateRestApi", "api-123", err);
            assert!(matches!(translated, ReconcileError::InvalidRequest { .. }));
        }
    }

    #[test]
    fn service_failures_carry_the_operation_name() {
        let err = ReconcileError::from_remote(
            "ImportRestApi",
            "api-123",
            ApiError::Service {
                status: 503,
                message: "unavailable".into(),
            },
        );
        match err {
            ReconcileError::GeneralServiceFailure { operation, .. } => {
                assert_eq!(operation, "ImportRestApi");
            }
            other => panic!("expected GeneralServiceFailure, got {other:?}"),
        }
    }
}
