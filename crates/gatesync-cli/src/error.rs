//! CLI error types with miette diagnostics.
//!
//! Maps reconciliation errors into user-facing diagnostics with exit codes.

use miette::Diagnostic;
use thiserror::Error;

use gatesync_core::ReconcileError;

/// Exit codes reported to the calling process.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not read state document '{path}'")]
    #[diagnostic(
        code(gatesync::state_io),
        help("Pass the path of a JSON file describing the resource state.")
    )]
    StateIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse state document '{path}'")]
    #[diagnostic(
        code(gatesync::state_parse),
        help("The document must be a JSON object in the resource state shape.")
    )]
    StateParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("startup configuration error")]
    #[diagnostic(
        code(gatesync::config),
        help("Set AWS_REGION to the deployment region, e.g. us-east-1.")
    )]
    Config(#[from] gatesync_core::ConfigError),

    #[error("could not build HTTP client")]
    #[diagnostic(code(gatesync::transport))]
    Transport(#[from] gatesync_api::ApiError),

    #[error(transparent)]
    #[diagnostic(code(gatesync::reconcile))]
    Reconcile(#[from] ReconcileError),

    #[error("could not render resource state")]
    #[diagnostic(code(gatesync::render))]
    Render(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StateIo { .. } | Self::StateParse { .. } | Self::Config(_) => exit_code::USAGE,
            Self::Reconcile(err) => match err {
                ReconcileError::NotFound { .. } => exit_code::NOT_FOUND,
                ReconcileError::InvalidRequest { .. }
                | ReconcileError::InvalidConfiguration { .. }
                | ReconcileError::Serialization { .. } => exit_code::USAGE,
                ReconcileError::GeneralServiceFailure { .. } => exit_code::GENERAL,
            },
            Self::Transport(_) | Self::Render(_) => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_its_own_exit_code() {
        let err = CliError::from(ReconcileError::NotFound {
            id: "api-123".to_owned(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn caller_fixable_errors_exit_with_usage() {
        let err = CliError::from(ReconcileError::InvalidRequest {
            message: "bad input".to_owned(),
            source: None,
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
