// ── Resource state model ──
//
// The declared shape of a managed REST API. The same struct serves as the
// desired state (caller-declared target) and the previous state (last-known
// remote configuration); the previous state is absent on create.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Network reachability mode of an API endpoint.
///
/// By contract a state declares at most one meaningful type; `Edge` is the
/// baseline assumed when none is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum EndpointType {
    Edge,
    Regional,
    Private,
}

impl EndpointType {
    /// The type assumed when a state declares no endpoint configuration.
    pub const BASELINE: Self = Self::Edge;
}

/// Where the service reads API keys from on incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ApiKeySourceType {
    Header,
    Authorizer,
}

/// How a full-replace put merges into the existing definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PutMode {
    Merge,
    Overwrite,
}

/// A key/value metadata pair attached to the managed resource.
/// Keys are unique within one state's tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Declared endpoint configuration: the endpoint-type list (one meaningful
/// entry) plus associated private endpoint identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfiguration {
    #[serde(default)]
    pub types: Vec<EndpointType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_endpoint_ids: Option<Vec<String>>,
}

/// Reference to an API definition document stored externally in S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The declared configuration of a managed REST API resource.
///
/// Supplied per invocation and immutable for the duration of one
/// reconciliation; `id` is assigned by the remote service on create and
/// threaded back into the returned state exactly once.
///
/// `body`, `body_s3_location`, and `clone_from` are mutually exclusive body
/// sources; `body::validate` enforces this before any remote call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestApiState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_compression_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_source_type: Option<ApiKeySourceType>,
    /// Set semantics; insertion order is not significant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_media_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_configuration: Option<EndpointConfiguration>,
    /// Inline API definition document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// External API definition document reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_s3_location: Option<S3Location>,
    /// Identifier of an existing API to clone on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_warnings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PutMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl RestApiState {
    /// The single meaningful endpoint type of this state, falling back to
    /// the baseline when no configuration (or an empty type list) is
    /// declared.
    pub fn endpoint_type(&self) -> EndpointType {
        self.endpoint_configuration
            .as_ref()
            .and_then(|config| config.types.first())
            .copied()
            .unwrap_or(EndpointType::BASELINE)
    }
}
