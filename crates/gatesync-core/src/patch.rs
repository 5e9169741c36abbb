// ── Patch planning ──
//
// Computes the ordered instruction list that moves the remote resource from
// its previous configuration to the desired one, for the attributes that
// only support partial update. Replacements always precede removals: the
// remote service applies the list sequentially and must see new values
// before anything disappears.

use gatesync_api::types::{PatchOp, PatchOperation};
use indexmap::IndexMap;

use crate::diff::elements_to_add_or_remove;
use crate::error::ReconcileError;
use crate::model::{EndpointType, RestApiState};
use crate::value::{AttributeValue, canonicalize};

/// Compute the partial-update plan between the previous and desired states.
///
/// An attribute left unspecified in the desired state yields no instruction
/// at all; the plan never replaces a value with a default. An empty plan is
/// valid and accepted by the service.
pub fn plan_update(
    previous: Option<&RestApiState>,
    desired: &RestApiState,
) -> Result<Vec<PatchOperation>, ReconcileError> {
    let mut replacements: IndexMap<String, Option<AttributeValue>> = IndexMap::new();
    let mut removals: IndexMap<String, Option<AttributeValue>> = IndexMap::new();

    replacements.insert(
        "/apiKeySource".to_owned(),
        desired
            .api_key_source_type
            .map(|source| AttributeValue::Symbol(source.into())),
    );
    replacements.insert(
        "/description".to_owned(),
        desired.description.clone().map(AttributeValue::Str),
    );
    replacements.insert(
        "/name".to_owned(),
        desired.name.clone().map(AttributeValue::Str),
    );
    replacements.insert(
        "/minimumCompressionSize".to_owned(),
        desired.minimum_compression_size.map(AttributeValue::Int),
    );
    replacements.insert(
        "/policy".to_owned(),
        desired.policy.clone().map(AttributeValue::Json),
    );

    let previous_type = previous.map_or(EndpointType::BASELINE, RestApiState::endpoint_type);
    let current_type = desired.endpoint_type();
    if previous_type != current_type {
        // The service expresses an endpoint-type transition as touching the
        // non-current member of the two-state pair: the path names the
        // complement of the type being moved to, the value names the target.
        let segment = if current_type == EndpointType::BASELINE {
            <&'static str>::from(EndpointType::Regional)
        } else {
            <&'static str>::from(EndpointType::BASELINE)
        };
        replacements.insert(
            format!("/endpointConfiguration/types/{segment}"),
            Some(AttributeValue::Symbol(current_type.into())),
        );
    }

    let previous_types = previous
        .and_then(|state| state.binary_media_types.clone())
        .unwrap_or_default();
    let current_types = desired.binary_media_types.clone().unwrap_or_default();

    for media_type in elements_to_add_or_remove(&previous_types, &current_types, true) {
        let path = format!("/binaryMediaTypes/{media_type}");
        replacements.insert(path, Some(AttributeValue::Str(media_type)));
    }
    for media_type in elements_to_add_or_remove(&previous_types, &current_types, false) {
        let path = format!("/binaryMediaTypes/{media_type}");
        removals.insert(path, Some(AttributeValue::Str(media_type)));
    }

    let mut plan = patch_operations(replacements, PatchOp::Replace)?;
    plan.extend(patch_operations(removals, PatchOp::Remove)?);
    Ok(plan)
}

/// Turn a path → value map into instructions of one kind, skipping entries
/// whose canonical value is null.
fn patch_operations(
    values: IndexMap<String, Option<AttributeValue>>,
    op: PatchOp,
) -> Result<Vec<PatchOperation>, ReconcileError> {
    let mut output = Vec::new();
    for (path, value) in values {
        if let Some(text) = canonicalize(value)? {
            output.push(PatchOperation {
                op,
                path,
                value: text,
            });
        }
    }
    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::EndpointConfiguration;

    fn endpoint(types: &[EndpointType]) -> Option<EndpointConfiguration> {
        Some(EndpointConfiguration {
            types: types.to_vec(),
            vpc_endpoint_ids: None,
        })
    }

    #[test]
    fn unchanged_minimal_states_plan_nothing() {
        let state = RestApiState {
            binary_media_types: Some(vec!["application/octet-stream".into()]),
            ..Default::default()
        };
        let plan = plan_update(Some(&state.clone()), &state).unwrap();
        assert_eq!(plan, vec![]);
    }

    #[test]
    fn scalar_attributes_replace_at_fixed_paths() {
        let desired = RestApiState {
            name: Some("orders".into()),
            description: Some("order api".into()),
            minimum_compression_size: Some(1024),
            policy: Some(json!({ "Version": "2012-10-17" })),
            ..Default::default()
        };
        let plan = plan_update(Some(&RestApiState::default()), &desired).unwrap();

        assert_eq!(
            plan,
            vec![
                PatchOperation::replace("/description", "order api"),
                PatchOperation::replace("/name", "orders"),
                PatchOperation::replace("/minimumCompressionSize", "1024"),
                PatchOperation::replace("/policy", r#"{"Version":"2012-10-17"}"#),
            ]
        );
    }

    #[test]
    fn unspecified_scalars_are_never_replaced_with_defaults() {
        let plan =
            plan_update(Some(&RestApiState::default()), &RestApiState::default()).unwrap();
        assert_eq!(plan, vec![]);
    }

    #[test]
    fn replaces_precede_removes_for_media_types() {
        let previous = RestApiState {
            binary_media_types: Some(vec!["a".into()]),
            ..Default::default()
        };
        let desired = RestApiState {
            binary_media_types: Some(vec!["b".into()]),
            ..Default::default()
        };
        let plan = plan_update(Some(&previous), &desired).unwrap();

        assert_eq!(
            plan,
            vec![
                PatchOperation::replace("/binaryMediaTypes/b", "b"),
                PatchOperation::remove("/binaryMediaTypes/a", "a"),
            ]
        );
        let first_remove = plan.iter().position(|op| op.op == PatchOp::Remove);
        let last_replace = plan.iter().rposition(|op| op.op == PatchOp::Replace);
        assert!(last_replace < first_remove);
    }

    #[test]
    fn endpoint_flip_away_from_baseline_touches_the_baseline_segment() {
        let desired = RestApiState {
            endpoint_configuration: endpoint(&[EndpointType::Regional]),
            ..Default::default()
        };
        // Previous has no endpoint configuration: defaults to EDGE.
        let plan = plan_update(Some(&RestApiState::default()), &desired).unwrap();

        assert_eq!(
            plan,
            vec![PatchOperation::replace(
                "/endpointConfiguration/types/EDGE",
                "REGIONAL"
            )]
        );
    }

    #[test]
    fn endpoint_flip_back_to_baseline_touches_the_regional_segment() {
        let previous = RestApiState {
            endpoint_configuration: endpoint(&[EndpointType::Regional]),
            ..Default::default()
        };
        let desired = RestApiState {
            endpoint_configuration: endpoint(&[EndpointType::Edge]),
            ..Default::default()
        };
        let plan = plan_update(Some(&previous), &desired).unwrap();

        assert_eq!(
            plan,
            vec![PatchOperation::replace(
                "/endpointConfiguration/types/REGIONAL",
                "EDGE"
            )]
        );
    }

    #[test]
    fn missing_previous_state_treats_all_media_types_as_additions() {
        let desired = RestApiState {
            binary_media_types: Some(vec!["image/png".into()]),
            ..Default::default()
        };
        let plan = plan_update(None, &desired).unwrap();
        assert_eq!(
            plan,
            vec![PatchOperation::replace("/binaryMediaTypes/image/png", "image/png")]
        );
    }
}
