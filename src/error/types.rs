//! Crate-wide error classification
//!
//! Accessor calls never retry or swallow failures; every error here is
//! surfaced to the immediate caller.

use thiserror::Error;

use crate::types::VideoStatus;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request errors (connection, TLS, client-side timeouts)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors (config files, upload sources)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-2xx response from the Vimeo API
    #[error("API request to {endpoint} failed with status {status}: {body}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// The endpoint that was requested
        endpoint: String,
        /// Response body as returned by the API
        body: String,
    },

    /// Video reached a terminal error status while polling for availability
    #[error("Transcoding/uploading error for {uri}: status {status:?}")]
    Transcoding {
        /// URI of the video being polled
        uri: String,
        /// The terminal error status observed
        status: VideoStatus,
    },

    /// Availability polling exhausted its caller-supplied ceiling
    #[error("Video {uri} not available after {polls} polls")]
    PollTimeout {
        /// URI of the video being polled
        uri: String,
        /// Number of polls performed before giving up
        polls: u32,
    },

    /// Resumable upload flow failure
    #[error("Upload failed: {reason}")]
    Upload {
        /// The reason why the upload failed
        reason: String,
        /// Optional stage information (create, transfer, verify)
        stage: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// A field expected in an API response was absent
    #[error("Field '{field}' missing in response from {endpoint}")]
    MissingField {
        /// The missing response field
        field: String,
        /// The endpoint that produced the response
        endpoint: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an API error from a non-2xx response
    pub fn api(status: u16, endpoint: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            endpoint: endpoint.into(),
            body: body.into(),
        }
    }

    /// Create a transcoding/uploading terminal failure
    pub fn transcoding(uri: impl Into<String>, status: VideoStatus) -> Self {
        Self::Transcoding {
            uri: uri.into(),
            status,
        }
    }

    /// Create a poll ceiling failure
    pub fn poll_timeout(uri: impl Into<String>, polls: u32) -> Self {
        Self::PollTimeout {
            uri: uri.into(),
            polls,
        }
    }

    /// Create an upload error
    pub fn upload(reason: impl Into<String>) -> Self {
        Self::Upload {
            reason: reason.into(),
            stage: None,
        }
    }

    /// Create an upload error with stage information
    pub fn upload_at_stage(reason: impl Into<String>, stage: impl Into<String>) -> Self {
        Self::Upload {
            reason: reason.into(),
            stage: Some(stage.into()),
        }
    }

    /// Create a configuration error
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing-field error
    pub fn missing_field(field: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            endpoint: endpoint.into(),
        }
    }

    /// HTTP status code of an [`Error::Api`], if that is what this is
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a retryable error
    ///
    /// The crate never retries on its own; callers can use this to decide
    /// whether wrapping a call in their own retry loop makes sense.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(..) => "http",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::Api { .. } => "api",
            Error::Transcoding { .. } => "transcoding",
            Error::PollTimeout { .. } => "poll_timeout",
            Error::Upload { .. } => "upload",
            Error::Config { .. } => "config",
            Error::MissingField { .. } => "missing_field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error() {
        let err = Error::api(404, "/videos/1", "not found");
        assert!(matches!(err, Error::Api { status: 404, .. }));
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("status 404"));
    }

    #[test]
    fn test_transcoding_error() {
        let err = Error::transcoding("/videos/1", VideoStatus::UploadingError);
        assert!(matches!(err, Error::Transcoding { .. }));
        assert!(err.to_string().contains("/videos/1"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("access_token", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error in access_token: must not be empty"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        let err: Error = json_err.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.category(), "json");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(Error::api(500, "/me", "").is_retryable());
        assert!(Error::api(429, "/me", "").is_retryable());
        assert!(!Error::api(404, "/me", "").is_retryable());
        assert!(!Error::transcoding("/videos/1", VideoStatus::TranscodingError).is_retryable());
    }

    #[test]
    fn test_upload_error_stage() {
        let err = Error::upload_at_stage("offset mismatch", "verify");
        if let Error::Upload { stage, .. } = &err {
            assert_eq!(stage.as_deref(), Some("verify"));
        } else {
            panic!("expected upload error");
        }
    }
}
