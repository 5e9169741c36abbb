// ── Lifecycle orchestration ──
//
// One reconciliation pass per lifecycle operation, terminal after that pass:
// resolve the body source, issue the primary remote call, then reconcile
// tags where the operation calls for it. Remote calls run strictly
// sequentially and every remote failure is translated into the
// `ReconcileError` taxonomy right here, in one place.

use std::sync::Arc;

use gatesync_api::types::{
    CreateRestApiRequest, EndpointConfiguration as WireEndpointConfiguration,
    ImportRestApiRequest, PutRestApiRequest, UpdateRestApiRequest,
};
use gatesync_api::{ControlPlane, ObjectStore};
use tracing::{debug, info};

use crate::arn::{Region, rest_api_arn};
use crate::body;
use crate::error::ReconcileError;
use crate::model::{EndpointConfiguration, RestApiState};
use crate::patch::plan_update;
use crate::tags;
use crate::value::{AttributeValue, canonicalize};

/// Drives a managed REST API resource toward its desired state.
///
/// Holds nothing but the injected collaborator handles and the resolved
/// region; each operation receives its own desired/previous state pair and
/// owns it exclusively for the duration of the pass.
pub struct Reconciler {
    control_plane: Arc<dyn ControlPlane>,
    object_store: Arc<dyn ObjectStore>,
    region: Region,
}

impl Reconciler {
    pub fn new(
        control_plane: Arc<dyn ControlPlane>,
        object_store: Arc<dyn ObjectStore>,
        region: Region,
    ) -> Self {
        Self {
            control_plane,
            object_store,
            region,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Create the resource remotely and thread the assigned identifier back
    /// into the returned state.
    ///
    /// A state carrying a definition document (inline or external) goes
    /// through the import call; anything else is created from attributes.
    pub async fn create(&self, desired: RestApiState) -> Result<RestApiState, ReconcileError> {
        body::validate(&desired)?;
        let mut desired = desired;

        let api = if body::uses_external_body(&desired) {
            let request = self.import_request(&desired).await?;
            self.control_plane
                .import_rest_api(request)
                .await
                .map_err(|err| {
                    ReconcileError::from_remote("ImportRestApi", display_id(&desired), err)
                })?
        } else {
            let request = create_request(&desired)?;
            self.control_plane
                .create_rest_api(request)
                .await
                .map_err(|err| {
                    ReconcileError::from_remote("CreateRestApi", display_id(&desired), err)
                })?
        };

        info!(id = %api.id, "created rest api");
        desired.id = Some(api.id);
        Ok(desired)
    }

    /// Confirm the resource exists remotely.
    pub async fn read(&self, desired: RestApiState) -> Result<RestApiState, ReconcileError> {
        let id = require_id(&desired)?;
        self.control_plane
            .get_rest_api(&id)
            .await
            .map_err(|err| ReconcileError::from_remote("GetRestApi", &id, err))?;
        debug!(id, "rest api exists");
        Ok(desired)
    }

    /// Move the remote resource to the desired state.
    ///
    /// A state carrying a definition document is replaced wholesale via the
    /// put call; anything else receives the minimal partial-update plan
    /// computed against the previous state. Tags are reconciled after the
    /// primary call either way.
    pub async fn update(
        &self,
        desired: RestApiState,
        previous: Option<RestApiState>,
    ) -> Result<RestApiState, ReconcileError> {
        body::validate(&desired)?;
        let id = require_id(&desired)?;

        if body::uses_external_body(&desired) {
            let request = self.put_request(&desired, &id).await?;
            self.control_plane
                .put_rest_api(request)
                .await
                .map_err(|err| ReconcileError::from_remote("PutRestApi", &id, err))?;
        } else {
            let plan = plan_update(previous.as_ref(), &desired)?;
            debug!(id, operations = plan.len(), "applying partial update");
            self.control_plane
                .update_rest_api(UpdateRestApiRequest {
                    rest_api_id: id.clone(),
                    patch_operations: plan,
                })
                .await
                .map_err(|err| ReconcileError::from_remote("UpdateRestApi", &id, err))?;
        }

        let arn = rest_api_arn(&self.region, &id);
        tags::reconcile(
            self.control_plane.as_ref(),
            &arn,
            &id,
            desired.tags.as_deref(),
        )
        .await?;

        info!(id, "updated rest api");
        Ok(desired)
    }

    /// Delete the resource remotely. A missing resource surfaces as
    /// `NotFound`; there is no tombstone state to return.
    pub async fn delete(&self, desired: &RestApiState) -> Result<(), ReconcileError> {
        let id = require_id(desired)?;
        self.control_plane
            .delete_rest_api(&id)
            .await
            .map_err(|err| ReconcileError::from_remote("DeleteRestApi", &id, err))?;
        info!(id, "deleted rest api");
        Ok(())
    }

    async fn import_request(
        &self,
        desired: &RestApiState,
    ) -> Result<ImportRestApiRequest, ReconcileError> {
        let body = body::resolve_body(desired, self.object_store.as_ref()).await?;
        Ok(ImportRestApiRequest {
            fail_on_warnings: desired.fail_on_warnings,
            parameters: desired.parameters.clone(),
            body,
        })
    }

    async fn put_request(
        &self,
        desired: &RestApiState,
        id: &str,
    ) -> Result<PutRestApiRequest, ReconcileError> {
        let body = body::resolve_body(desired, self.object_store.as_ref()).await?;
        Ok(PutRestApiRequest {
            rest_api_id: id.to_owned(),
            mode: desired.mode.map(|mode| <&'static str>::from(mode).to_owned()),
            fail_on_warnings: desired.fail_on_warnings,
            parameters: desired.parameters.clone(),
            body,
        })
    }
}

fn create_request(desired: &RestApiState) -> Result<CreateRestApiRequest, ReconcileError> {
    Ok(CreateRestApiRequest {
        name: desired.name.clone(),
        description: desired.description.clone(),
        clone_from: desired.clone_from.clone(),
        policy: canonicalize(desired.policy.clone().map(AttributeValue::Json))?,
        api_key_source: desired
            .api_key_source_type
            .map(|source| <&'static str>::from(source).to_owned()),
        binary_media_types: desired.binary_media_types.clone(),
        minimum_compression_size: desired.minimum_compression_size,
        endpoint_configuration: desired
            .endpoint_configuration
            .as_ref()
            .map(wire_endpoint_configuration),
    })
}

fn wire_endpoint_configuration(config: &EndpointConfiguration) -> WireEndpointConfiguration {
    WireEndpointConfiguration {
        types: config
            .types
            .iter()
            .map(|ty| <&'static str>::from(*ty).to_owned())
            .collect(),
        vpc_endpoint_ids: config.vpc_endpoint_ids.clone(),
    }
}

fn require_id(state: &RestApiState) -> Result<String, ReconcileError> {
    state.id.clone().ok_or_else(|| ReconcileError::InvalidRequest {
        message: "resource identifier is required for this operation".to_owned(),
        source: None,
    })
}

/// Best identifier for diagnostics before the remote one is assigned.
fn display_id(state: &RestApiState) -> &str {
    state
        .id
        .as_deref()
        .or(state.name.as_deref())
        .unwrap_or("<unassigned>")
}
