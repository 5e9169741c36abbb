// Wire types for the API Gateway control plane (v1 REST surface).
//
// Field names follow the remote JSON contract (camelCase). Optional request
// fields are skipped when unset so the service never sees an explicit null
// where the caller simply left a value unspecified.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// ── Patch operations ────────────────────────────────────────────────

/// Operation kind of a single partial-update instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PatchOp {
    Replace,
    Remove,
}

/// One (op, path, value) unit of a partial-update request.
///
/// The instruction list is ordered; the service applies it sequentially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    pub value: String,
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn remove(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: value.into(),
        }
    }
}

// ── Requests ────────────────────────────────────────────────────────

/// Endpoint configuration as the service expects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfiguration {
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_endpoint_ids: Option<Vec<String>>,
}

/// `POST /restapis` — create a REST API from attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestApiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_media_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_compression_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_configuration: Option<EndpointConfiguration>,
}

/// `POST /restapis?mode=import` — create a REST API from an API definition
/// document. The body travels as the raw request payload, not as JSON
/// fields, so this struct is assembled by hand in the client.
#[derive(Debug, Clone, Default)]
pub struct ImportRestApiRequest {
    pub fail_on_warnings: Option<bool>,
    pub parameters: Option<HashMap<String, String>>,
    pub body: Vec<u8>,
}

/// `PUT /restapis/{id}` — full replace of an existing API definition.
#[derive(Debug, Clone, Default)]
pub struct PutRestApiRequest {
    pub rest_api_id: String,
    pub mode: Option<String>,
    pub fail_on_warnings: Option<bool>,
    pub parameters: Option<HashMap<String, String>>,
    pub body: Vec<u8>,
}

/// `PATCH /restapis/{id}` — partial update via an ordered instruction list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestApiRequest {
    #[serde(skip)]
    pub rest_api_id: String,
    pub patch_operations: Vec<PatchOperation>,
}

// ── Responses ───────────────────────────────────────────────────────

/// The REST API representation returned by create/get/put/patch/import.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestApi {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub binary_media_types: Option<Vec<String>>,
    #[serde(default)]
    pub minimum_compression_size: Option<i64>,
    #[serde(default)]
    pub api_key_source: Option<String>,
    #[serde(default)]
    pub endpoint_configuration: Option<EndpointConfiguration>,
    #[serde(default)]
    pub policy: Option<String>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

/// Envelope of `GET /tags/{arn}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TagCollection {
    #[serde(default)]
    pub tags: HashMap<String, String>,
}
