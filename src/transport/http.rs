//! reqwest-backed transport
//!
//! Carries the bearer token, the API version Accept header, and the
//! resumable (tus) upload flow.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::Settings;
use crate::transport::{ApiResponse, Transport};
use crate::{Error, Result};

/// Default Vimeo API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.vimeo.com";

/// Vimeo API version negotiated via the Accept header
const ACCEPT_HEADER: &str = "application/vnd.vimeo.*+json;version=3.4";

/// tus protocol version for resumable uploads
const TUS_VERSION: &str = "1.0.0";

/// reqwest-backed [`Transport`] implementation
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Configured HTTP client
    client: Client,
    /// Base URL for the API
    base_url: String,
    /// OAuth2 bearer token
    access_token: String,
}

impl HttpTransport {
    /// Create a transport from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::with_base_url(settings, settings.api.base_url.clone())
    }

    /// Create a transport against a custom base URL (for testing)
    pub fn with_base_url(settings: &Settings, base_url: String) -> Result<Self> {
        url::Url::parse(&base_url)?;

        let client = Client::builder()
            .user_agent(settings.api.user_agent.clone())
            .timeout(Duration::from_secs(settings.api.request_timeout))
            .connect_timeout(Duration::from_secs(settings.api.connect_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: settings.credentials.access_token.clone(),
        })
    }

    /// The base URL this transport talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        // Paging and upload URLs can come back absolute; pass them through.
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.build_url(path))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<ApiResponse> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse::new(status, body))
    }

    /// Create the video shell that receives the upload
    ///
    /// Returns the video URI and the tus upload link.
    async fn create_upload(&self, size: u64, params: &Value) -> Result<(String, String)> {
        let mut body = match params {
            Value::Object(map) => map.clone(),
            Value::Null => serde_json::Map::new(),
            _ => {
                return Err(Error::upload_at_stage(
                    "upload params must be a JSON object",
                    "create",
                ));
            }
        };
        body.insert(
            "upload".to_string(),
            serde_json::json!({ "approach": "tus", "size": size.to_string() }),
        );

        let response = self
            .post("/me/videos", &[], &Value::Object(body))
            .await?
            .error_for_status("/me/videos")?;
        let created: Value = response.json()?;

        let uri = created
            .get("uri")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::missing_field("uri", "/me/videos"))?
            .to_string();
        let upload_link = created
            .pointer("/upload/upload_link")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::missing_field("upload.upload_link", "/me/videos"))?
            .to_string();

        tracing::debug!(%uri, size, "created upload shell");
        Ok((uri, upload_link))
    }

    /// Push file bytes to the tus upload link until the remote offset
    /// reaches the file size
    async fn transfer(&self, upload_link: &str, bytes: Vec<u8>) -> Result<()> {
        let size = bytes.len() as u64;
        let mut offset = 0u64;

        while offset < size {
            let chunk = bytes[offset as usize..].to_vec();
            let response = self
                .client
                .patch(upload_link)
                .header("Tus-Resumable", TUS_VERSION)
                .header("Upload-Offset", offset.to_string())
                .header(reqwest::header::CONTENT_TYPE, "application/offset+octet-stream")
                .body(chunk)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                return Err(Error::upload_at_stage(
                    format!("upload link returned status {}", status),
                    "transfer",
                ));
            }

            let new_offset = response
                .headers()
                .get("Upload-Offset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .ok_or_else(|| {
                    Error::upload_at_stage("upload link returned no Upload-Offset", "transfer")
                })?;

            if new_offset <= offset {
                return Err(Error::upload_at_stage(
                    format!("upload offset stalled at {}", offset),
                    "verify",
                ));
            }
            tracing::debug!(offset = new_offset, size, "upload progressed");
            offset = new_offset;
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<ApiResponse> {
        tracing::debug!(path, "GET");
        let mut builder = self.request(reqwest::Method::GET, path).query(query);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        self.execute(builder).await
    }

    async fn post(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &Value,
    ) -> Result<ApiResponse> {
        tracing::debug!(path, "POST");
        let builder = self.request(reqwest::Method::POST, path).query(query).json(body);
        self.execute(builder).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        tracing::debug!(path, "PATCH");
        let builder = self.request(reqwest::Method::PATCH, path).json(body);
        self.execute(builder).await
    }

    async fn put(&self, path: &str) -> Result<ApiResponse> {
        tracing::debug!(path, "PUT");
        let builder = self.request(reqwest::Method::PUT, path);
        self.execute(builder).await
    }

    async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<ApiResponse> {
        tracing::debug!(path, "DELETE");
        let builder = self.request(reqwest::Method::DELETE, path).query(query);
        self.execute(builder).await
    }

    async fn upload(&self, file_path: &Path, params: &Value) -> Result<String> {
        let bytes = tokio::fs::read(file_path).await?;
        let size = bytes.len() as u64;
        tracing::info!(file = %file_path.display(), size, "starting resumable upload");

        let (uri, upload_link) = self.create_upload(size, params).await?;
        self.transfer(&upload_link, bytes).await?;

        tracing::info!(%uri, "upload complete");
        Ok(uri)
    }
}
