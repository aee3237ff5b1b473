//! HTTP verb primitives
//!
//! The accessors in [`crate::api`] never talk to reqwest directly; they go
//! through the [`Transport`] trait so tests can substitute a scripted
//! implementation. [`HttpTransport`] is the real, reqwest-backed one.

pub mod http;

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use crate::Result;

pub use http::HttpTransport;

/// Verb-based request primitives against the Vimeo API
///
/// Each method issues exactly one HTTP request. Transport-level failures
/// (connection, client-side timeout) surface as [`crate::Error::Http`];
/// non-2xx responses are *not* an error at this layer — callers decide via
/// [`ApiResponse::error_for_status`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// GET a resource path with query parameters
    ///
    /// `timeout` overrides the client default for this one request.
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<ApiResponse>;

    /// POST a JSON body to a resource path
    async fn post(&self, path: &str, query: &[(String, String)], body: &Value)
    -> Result<ApiResponse>;

    /// PATCH a resource path with a JSON body
    async fn patch(&self, path: &str, body: &Value) -> Result<ApiResponse>;

    /// PUT against a resource path, no body
    async fn put(&self, path: &str) -> Result<ApiResponse>;

    /// DELETE a resource path with query parameters
    async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<ApiResponse>;

    /// Upload a video file via the resumable upload flow
    ///
    /// Returns the URI of the created video. `params` are merged into the
    /// create request body (name, description, privacy, ...).
    async fn upload(&self, file_path: &Path, params: &Value) -> Result<String>;
}

/// Status code and body of one API response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Create a response from parts (useful for scripted test transports)
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code of the response
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Deserialize the response body
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Raw response body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Map a non-2xx status to [`crate::Error::Api`]
    ///
    /// `endpoint` names the request for the error message.
    pub fn error_for_status(self, endpoint: &str) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            tracing::warn!(
                endpoint,
                status = self.status.as_u16(),
                "API request failed"
            );
            Err(crate::Error::api(
                self.status.as_u16(),
                endpoint,
                self.body,
            ))
        }
    }
}
