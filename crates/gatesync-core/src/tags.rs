// ── Tag reconciliation ──
//
// Moves a resource's remote tag set to the desired one with at most two
// mutation calls: one untag carrying every current key, one tag carrying the
// full desired map. The full-replace strategy trades a transient tag absence
// between the two calls for fewer edge cases than a per-key diff.

use std::collections::HashMap;

use gatesync_api::ControlPlane;
use tracing::debug;

use crate::error::ReconcileError;
use crate::model::Tag;

/// The computed difference between the current and desired tag maps.
///
/// Empty on both sides when the maps are equal; a key whose value is
/// unchanged never causes a delta on its own.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TagDelta {
    /// Keys to strip from the resource (all current keys, when any change
    /// is needed and the resource currently has tags).
    pub removals: Vec<String>,
    /// Full key → value map to apply afterwards.
    pub creates: HashMap<String, String>,
}

impl TagDelta {
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.creates.is_empty()
    }
}

/// Compute the delta that moves `current` to `desired`.
pub fn delta(current: &HashMap<String, String>, desired: &HashMap<String, String>) -> TagDelta {
    if current == desired {
        return TagDelta::default();
    }
    TagDelta {
        removals: current.keys().cloned().collect(),
        creates: desired.clone(),
    }
}

/// Build the desired tag map from a state's tag list; `None` means an empty
/// desired set, i.e. every remote tag should go away.
pub fn desired_map(tags: Option<&[Tag]>) -> HashMap<String, String> {
    tags.unwrap_or_default()
        .iter()
        .map(|tag| (tag.key.clone(), tag.value.clone()))
        .collect()
}

/// Reconcile the remote tag set against the desired tag list.
///
/// Idempotent: equal current and desired maps issue zero mutation calls.
pub async fn reconcile(
    control_plane: &dyn ControlPlane,
    resource_arn: &str,
    resource_id: &str,
    desired_tags: Option<&[Tag]>,
) -> Result<(), ReconcileError> {
    let current = control_plane
        .get_tags(resource_arn)
        .await
        .map_err(|err| ReconcileError::from_remote("GetTags", resource_id, err))?;

    let desired = desired_map(desired_tags);
    let delta = delta(&current, &desired);
    if delta.is_empty() {
        debug!(resource_arn, "tags already converged");
        return Ok(());
    }

    if !delta.removals.is_empty() {
        debug!(resource_arn, count = delta.removals.len(), "removing current tags");
        control_plane
            .untag_resource(resource_arn, delta.removals)
            .await
            .map_err(|err| ReconcileError::from_remote("UntagResource", resource_id, err))?;
    }

    if !delta.creates.is_empty() {
        debug!(resource_arn, count = delta.creates.len(), "applying desired tags");
        control_plane
            .tag_resource(resource_arn, delta.creates)
            .await
            .map_err(|err| ReconcileError::from_remote("TagResource", resource_id, err))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn equal_maps_produce_an_empty_delta() {
        let current = map(&[("a", "1"), ("b", "2")]);
        assert!(delta(&current, &current.clone()).is_empty());
    }

    #[test]
    fn changed_value_replaces_the_full_set() {
        let current = map(&[("a", "1")]);
        let desired = map(&[("a", "2")]);
        let computed = delta(&current, &desired);
        assert_eq!(computed.removals, vec!["a".to_owned()]);
        assert_eq!(computed.creates, desired);
    }

    #[test]
    fn empty_desired_set_removes_everything_and_creates_nothing() {
        let current = map(&[("a", "1")]);
        let computed = delta(&current, &HashMap::new());
        assert_eq!(computed.removals.len(), 1);
        assert!(computed.creates.is_empty());
    }

    #[test]
    fn no_current_tags_means_create_only() {
        let desired = map(&[("env", "prod")]);
        let computed = delta(&HashMap::new(), &desired);
        assert!(computed.removals.is_empty());
        assert_eq!(computed.creates, desired);
    }

    #[test]
    fn desired_map_from_tag_list() {
        let tags = [Tag::new("env", "prod"), Tag::new("team", "payments")];
        let built = desired_map(Some(&tags));
        assert_eq!(built, map(&[("env", "prod"), ("team", "payments")]));
        assert!(desired_map(None).is_empty());
    }
}
