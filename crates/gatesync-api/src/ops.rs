// Collaborator seams consumed by the reconciliation core.
//
// The core never talks HTTP directly: it receives these traits as injected
// handles and supplies one typed request per remote operation. Tests swap in
// recording fakes; production wires up the reqwest-backed clients below.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{
    CreateRestApiRequest, ImportRestApiRequest, PutRestApiRequest, RestApi, UpdateRestApiRequest,
};

/// The API Gateway control plane, reduced to the operations the
/// reconciler issues.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Create a REST API from attributes.
    async fn create_rest_api(&self, request: CreateRestApiRequest) -> Result<RestApi, ApiError>;

    /// Create a REST API by importing an API definition document.
    async fn import_rest_api(&self, request: ImportRestApiRequest) -> Result<RestApi, ApiError>;

    /// Fetch a REST API by identifier.
    async fn get_rest_api(&self, rest_api_id: &str) -> Result<RestApi, ApiError>;

    /// Replace an existing API definition wholesale.
    async fn put_rest_api(&self, request: PutRestApiRequest) -> Result<RestApi, ApiError>;

    /// Apply an ordered list of partial-update instructions.
    async fn update_rest_api(&self, request: UpdateRestApiRequest) -> Result<RestApi, ApiError>;

    /// Delete a REST API by identifier.
    async fn delete_rest_api(&self, rest_api_id: &str) -> Result<(), ApiError>;

    /// Fetch the current tag map of a resource.
    async fn get_tags(&self, resource_arn: &str) -> Result<HashMap<String, String>, ApiError>;

    /// Add or replace tags on a resource.
    async fn tag_resource(
        &self,
        resource_arn: &str,
        tags: HashMap<String, String>,
    ) -> Result<(), ApiError>;

    /// Remove tags from a resource by key.
    async fn untag_resource(&self, resource_arn: &str, tag_keys: Vec<String>)
    -> Result<(), ApiError>;
}

/// Blob storage, reduced to the single fetch the body resolver needs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch object bytes, optionally pinned to an integrity tag.
    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        if_match: Option<&str>,
    ) -> Result<Vec<u8>, ApiError>;
}
