//! REST API client for the spacing endpoints.
//!
//! Wraps `GET/PATCH /spacing/{component_id}` and `POST /spacing` using
//! [`reqwest`]. The [`SpacingBackend`] trait is the seam the form talks
//! through, so tests can swap in an in-memory backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use spacing_core::spacing::{SpacingPatch, SpacingRecord};

use crate::storage::StoreError;

/// Errors from the client side of the spacing API.
#[derive(Debug, thiserror::Error)]
pub enum SpacingApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Spacing API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response with no usable body.
    #[error("Unexpected empty response from {0}")]
    EmptyResponse(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value was rejected before anything was sent.
    #[error("{0}")]
    Validation(String),

    /// No record is loaded, so there is nothing to edit or save.
    #[error("no spacing record is loaded")]
    NotReady,

    /// The local component-id store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Operations the form needs from the server.
#[async_trait]
pub trait SpacingBackend: Send + Sync {
    async fn get_spacing(&self, component_id: &str) -> Result<SpacingRecord, SpacingApiError>;

    async fn patch_spacing(
        &self,
        component_id: &str,
        patch: &SpacingPatch,
    ) -> Result<(), SpacingApiError>;

    /// Create a record with default sides and return its `component_id`.
    async fn create_spacing(&self) -> Result<String, SpacingApiError>;
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    component_id: String,
}

/// HTTP client for a spacing API server.
pub struct SpacingApi {
    client: reqwest::Client,
    api_url: String,
}

impl SpacingApi {
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:12348`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn spacing_url(&self, component_id: &str) -> String {
        format!("{}/spacing/{}", self.api_url, component_id)
    }

    // ---- private helpers ----

    /// Return the response unchanged on a 2xx status, otherwise an
    /// [`SpacingApiError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SpacingApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SpacingApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a 2xx body, treating an empty body or JSON `null` as
    /// [`SpacingApiError::EmptyResponse`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SpacingApiError> {
        let url = response.url().to_string();
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(SpacingApiError::EmptyResponse(url));
        }
        serde_json::from_slice::<Option<T>>(&bytes)?.ok_or(SpacingApiError::EmptyResponse(url))
    }
}

#[async_trait]
impl SpacingBackend for SpacingApi {
    async fn get_spacing(&self, component_id: &str) -> Result<SpacingRecord, SpacingApiError> {
        let response = self
            .client
            .get(self.spacing_url(component_id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn patch_spacing(
        &self,
        component_id: &str,
        patch: &SpacingPatch,
    ) -> Result<(), SpacingApiError> {
        let response = self
            .client
            .patch(self.spacing_url(component_id))
            .json(patch)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn create_spacing(&self) -> Result<String, SpacingApiError> {
        let response = self
            .client
            .post(format!("{}/spacing", self.api_url))
            .send()
            .await?;

        let created: CreateResponse = Self::parse_response(response).await?;
        if created.component_id.is_empty() {
            return Err(SpacingApiError::EmptyResponse(format!(
                "{}/spacing",
                self.api_url
            )));
        }
        Ok(created.component_id)
    }
}
