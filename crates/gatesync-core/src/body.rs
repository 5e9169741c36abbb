// ── Body source resolution ──
//
// A desired state may carry its API definition document inline, as an
// external S3 reference, or not at all (clone-from or attribute-only
// creation). The three sources are mutually exclusive; validation runs
// before any remote call so a conflicting state never causes a partial
// remote change.

use gatesync_api::ObjectStore;
use tracing::debug;

use crate::error::ReconcileError;
use crate::model::RestApiState;

/// Reject states that declare more than one body source.
pub fn validate(state: &RestApiState) -> Result<(), ReconcileError> {
    if state.body.is_some() && state.body_s3_location.is_some() {
        return Err(ReconcileError::invalid_configuration(
            "body cannot be specified together with bodyS3Location",
        ));
    }
    if uses_external_body(state) && state.clone_from.is_some() {
        return Err(ReconcileError::invalid_configuration(
            "body and/or bodyS3Location cannot be specified together with cloneFrom",
        ));
    }
    Ok(())
}

/// Whether this state's definition comes from a document (inline or S3)
/// rather than from attributes, i.e. whether the import/put call family
/// applies.
pub fn uses_external_body(state: &RestApiState) -> bool {
    state.body.is_some() || state.body_s3_location.is_some()
}

/// Materialize the definition document bytes for an import or put call.
///
/// Callers must check `uses_external_body` first; a state with no body
/// source is a contract violation and reports as invalid configuration.
pub async fn resolve_body(
    state: &RestApiState,
    store: &dyn ObjectStore,
) -> Result<Vec<u8>, ReconcileError> {
    if let Some(body) = &state.body {
        return serde_json::to_vec(body).map_err(|_| ReconcileError::Serialization {
            type_name: "body document",
        });
    }

    if let Some(location) = &state.body_s3_location {
        let bucket = location.bucket.as_deref().ok_or_else(|| {
            ReconcileError::invalid_configuration("bodyS3Location is missing a bucket")
        })?;
        let key = location.key.as_deref().ok_or_else(|| {
            ReconcileError::invalid_configuration("bodyS3Location is missing a key")
        })?;

        debug!(bucket, key, "resolving definition document from s3");
        return store
            .get_object(bucket, key, location.e_tag.as_deref())
            .await
            .map_err(|err| ReconcileError::InvalidConfiguration {
                message: format!("unable to retrieve definition document from s3://{bucket}/{key}"),
                source: Some(err),
            });
    }

    Err(ReconcileError::invalid_configuration(
        "no body source configured",
    ))
}
