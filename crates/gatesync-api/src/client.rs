// Control-plane HTTP client
//
// Wraps `reqwest::Client` with API Gateway URL construction, error-body
// classification, and JSON decoding. All control-plane operations go through
// the small set of request helpers here so error translation happens in
// exactly one place.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::ApiError;
use crate::ops::ControlPlane;
use crate::transport::TransportConfig;
use crate::types::{
    CreateRestApiRequest, ImportRestApiRequest, PutRestApiRequest, RestApi, TagCollection,
    UpdateRestApiRequest,
};

/// Header carrying the service's error type name, e.g. `NotFoundException`.
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Raw HTTP client for the API Gateway v1 control plane.
///
/// Credential signing is owned by the surrounding transport (a signing
/// proxy or default headers on the `TransportConfig`); this client only
/// shapes requests and classifies responses.
pub struct RestApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the control-plane endpoint root, e.g.
    /// `https://apigateway.us-east-1.amazonaws.com`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, ApiError> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The control-plane endpoint root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint for the given region, `https://apigateway.{region}.amazonaws.com`.
    pub fn regional_endpoint(region: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!(
            "https://apigateway.{region}.amazonaws.com"
        ))?)
    }

    // ── URL builders ─────────────────────────────────────────────────

    fn api_url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Tag operations address resources by ARN, percent-encoded into the path.
    fn tag_url(&self, resource_arn: &str) -> Result<Url, ApiError> {
        let encoded = resource_arn.replace('/', "%2F");
        self.api_url(&format!("/tags/{encoded}"))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Classify a non-success response into an `ApiError`.
    ///
    /// The service names the failed exception type in a response header;
    /// that name takes precedence over the bare status code.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_type = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_default();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        Err(classify(status.as_u16(), &error_type, message))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = Self::check(self.http.get(url).send().await?).await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Self::check(self.http.post(url).json(body).send().await?).await?;
        Self::decode(response).await
    }
}

fn classify(status: u16, error_type: &str, message: String) -> ApiError {
    // Strip any namespace prefix the service may include.
    let name = error_type.rsplit('#').next().unwrap_or_default();
    match name {
        "NotFoundException" => ApiError::NotFound { message },
        "BadRequestException" => ApiError::BadRequest { message },
        "UnauthorizedException" => ApiError::Unauthorized { message },
        "ConflictException" => ApiError::Conflict { message },
        "LimitExceededException" => ApiError::LimitExceeded { message },
        "TooManyRequestsException" => ApiError::TooManyRequests { message },
        _ => match status {
            404 => ApiError::NotFound { message },
            400 => ApiError::BadRequest { message },
            401 | 403 => ApiError::Unauthorized { message },
            409 => ApiError::Conflict { message },
            429 => ApiError::TooManyRequests { message },
            _ => ApiError::Service { status, message },
        },
    }
}

#[async_trait]
impl ControlPlane for RestApiClient {
    /// `POST /restapis`
    async fn create_rest_api(&self, request: CreateRestApiRequest) -> Result<RestApi, ApiError> {
        let url = self.api_url("/restapis")?;
        debug!(name = request.name.as_deref(), "creating rest api");
        self.post_json(url, &request).await
    }

    /// `POST /restapis?mode=import`
    async fn import_rest_api(&self, request: ImportRestApiRequest) -> Result<RestApi, ApiError> {
        let mut url = self.api_url("/restapis")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("mode", "import");
            if let Some(fail) = request.fail_on_warnings {
                query.append_pair("failonwarnings", &fail.to_string());
            }
            for (k, v) in request.parameters.iter().flatten() {
                query.append_pair(&format!("parameters[{k}]"), v);
            }
        }
        debug!(bytes = request.body.len(), "importing rest api definition");
        let response =
            Self::check(self.http.post(url).body(request.body).send().await?).await?;
        Self::decode(response).await
    }

    /// `GET /restapis/{id}`
    async fn get_rest_api(&self, rest_api_id: &str) -> Result<RestApi, ApiError> {
        let url = self.api_url(&format!("/restapis/{rest_api_id}"))?;
        debug!(rest_api_id, "fetching rest api");
        self.get_json(url).await
    }

    /// `PUT /restapis/{id}`
    async fn put_rest_api(&self, request: PutRestApiRequest) -> Result<RestApi, ApiError> {
        let mut url = self.api_url(&format!("/restapis/{}", request.rest_api_id))?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(mode) = &request.mode {
                query.append_pair("mode", mode);
            }
            if let Some(fail) = request.fail_on_warnings {
                query.append_pair("failonwarnings", &fail.to_string());
            }
            for (k, v) in request.parameters.iter().flatten() {
                query.append_pair(&format!("parameters[{k}]"), v);
            }
        }
        debug!(
            rest_api_id = %request.rest_api_id,
            bytes = request.body.len(),
            "replacing rest api definition"
        );
        let response = Self::check(self.http.put(url).body(request.body).send().await?).await?;
        Self::decode(response).await
    }

    /// `PATCH /restapis/{id}`
    async fn update_rest_api(&self, request: UpdateRestApiRequest) -> Result<RestApi, ApiError> {
        let url = self.api_url(&format!("/restapis/{}", request.rest_api_id))?;
        debug!(
            rest_api_id = %request.rest_api_id,
            operations = request.patch_operations.len(),
            "patching rest api"
        );
        let response = Self::check(self.http.patch(url).json(&request).send().await?).await?;
        Self::decode(response).await
    }

    /// `DELETE /restapis/{id}`
    async fn delete_rest_api(&self, rest_api_id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("/restapis/{rest_api_id}"))?;
        debug!(rest_api_id, "deleting rest api");
        Self::check(self.http.delete(url).send().await?).await?;
        Ok(())
    }

    /// `GET /tags/{arn}`
    async fn get_tags(&self, resource_arn: &str) -> Result<HashMap<String, String>, ApiError> {
        let url = self.tag_url(resource_arn)?;
        debug!(resource_arn, "fetching tags");
        let collection: TagCollection = self.get_json(url).await?;
        Ok(collection.tags)
    }

    /// `PUT /tags/{arn}`
    async fn tag_resource(
        &self,
        resource_arn: &str,
        tags: HashMap<String, String>,
    ) -> Result<(), ApiError> {
        let url = self.tag_url(resource_arn)?;
        debug!(resource_arn, count = tags.len(), "tagging resource");
        let body = serde_json::json!({ "tags": tags });
        Self::check(self.http.put(url).json(&body).send().await?).await?;
        Ok(())
    }

    /// `DELETE /tags/{arn}?tagKeys=...`
    async fn untag_resource(
        &self,
        resource_arn: &str,
        tag_keys: Vec<String>,
    ) -> Result<(), ApiError> {
        let mut url = self.tag_url(resource_arn)?;
        {
            let mut query = url.query_pairs_mut();
            for key in &tag_keys {
                query.append_pair("tagKeys", key);
            }
        }
        debug!(resource_arn, count = tag_keys.len(), "untagging resource");
        Self::check(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}
