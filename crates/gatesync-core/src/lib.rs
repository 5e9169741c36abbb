//! Reconciliation and diff engine for declaratively managed REST API
//! resources.
//!
//! The caller supplies a desired state (and, for updates, the last-known
//! previous state); the [`Reconciler`] decides which remote operation the
//! change implies, computes the minimal partial-update plan, and reconciles
//! metadata tags. Transport, credentials, and retries live behind the
//! injected `gatesync-api` collaborator traits.

pub mod arn;
pub mod body;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod patch;
pub mod reconciler;
pub mod tags;
pub mod value;

pub use arn::{Region, rest_api_arn};
pub use config::{ConfigError, load_region};
pub use error::ReconcileError;
pub use model::{
    ApiKeySourceType, EndpointConfiguration, EndpointType, PutMode, RestApiState, S3Location, Tag,
};
pub use reconciler::Reconciler;
