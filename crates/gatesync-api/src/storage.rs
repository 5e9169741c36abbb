// S3 object fetch
//
// One operation: GET the bytes of a bucket/key, optionally pinned to an
// ETag via `If-Match`. Virtual-hosted addressing keeps the bucket out of
// the path.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::ApiError;
use crate::ops::ObjectStore;
use crate::transport::TransportConfig;

/// Minimal S3 object client used to resolve externally stored API
/// definition documents.
pub struct S3ObjectClient {
    http: reqwest::Client,
    region: String,
    /// Test hook: when set, all requests go to this root and the bucket
    /// becomes the first path segment instead of a subdomain.
    endpoint_override: Option<Url>,
}

impl S3ObjectClient {
    pub fn new(region: impl Into<String>, transport: &TransportConfig) -> Result<Self, ApiError> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            region: region.into(),
            endpoint_override: None,
        })
    }

    /// Route all requests to a fixed endpoint (path-style addressing).
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    fn object_url(&self, bucket: &str, key: &str) -> Result<Url, ApiError> {
        match &self.endpoint_override {
            Some(root) => Ok(root.join(&format!("{bucket}/{key}"))?),
            None => Ok(Url::parse(&format!(
                "https://{bucket}.s3.{}.amazonaws.com/{key}",
                self.region
            ))?),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectClient {
    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        if_match: Option<&str>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.object_url(bucket, key)?;
        debug!(bucket, key, "fetching object from s3");

        let mut request = self.http.get(url);
        if let Some(etag) = if_match {
            request = request.header(reqwest::header::IF_MATCH, etag);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                404 => ApiError::NotFound { message },
                // Includes 412, i.e. the ETag no longer matches the object.
                400..=499 => ApiError::BadRequest { message },
                s => ApiError::Service { status: s, message },
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
