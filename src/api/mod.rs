//! Resource accessors
//!
//! [`VimeoApiClient`] is the facade over all per-resource helpers. It holds
//! a shared [`Transport`] handle and the base resource URI (`/me` or
//! `/users/{id}`) captured at construction; every call is otherwise
//! stateless and issues exactly one request, failing on any non-2xx status
//! without retrying.

pub mod embed_presets;
pub mod projects;
pub mod users;
pub mod videos;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::transport::{HttpTransport, Transport};
use crate::utils::build_user_uri;
use crate::Result;

pub use videos::PollOptions;

/// Facade over the per-resource Vimeo API helpers
#[derive(Clone)]
pub struct VimeoApiClient {
    /// Request primitives; shared so the pagination fan-out can clone it
    transport: Arc<dyn Transport>,
    /// `/me` or `/users/{id}`
    base_uri: String,
    /// Timeout for listing requests
    list_timeout: Duration,
    /// Default interval between availability polls
    poll_interval: Duration,
}

impl VimeoApiClient {
    /// Create a client over an existing transport
    ///
    /// `user_id` selects the base resource URI; `None` (or zero) means the
    /// authenticated user (`/me`).
    pub fn new(transport: Arc<dyn Transport>, user_id: Option<u64>) -> Self {
        Self {
            transport,
            base_uri: build_user_uri(user_id),
            list_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_secs(30),
        }
    }

    /// Create a client with a reqwest-backed transport from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::new(settings)?;
        Ok(Self {
            transport: Arc::new(transport),
            base_uri: build_user_uri(settings.credentials.user_id),
            list_timeout: Duration::from_secs(settings.api.list_timeout),
            poll_interval: Duration::from_secs(settings.polling.interval_secs),
        })
    }

    /// The base resource URI this client operates on
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The transport handle
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub(crate) fn list_timeout(&self) -> Duration {
        self.list_timeout
    }

    /// Build the `fields` query parameter from a field selection
    ///
    /// `None` (and the empty selection) falls back to `defaults`; an empty
    /// result means no filter is sent at all.
    pub(crate) fn fields_param(
        fields: Option<&[&str]>,
        defaults: &[&str],
    ) -> Vec<(String, String)> {
        let effective = match fields {
            Some(fields) if !fields.is_empty() => fields,
            _ => defaults,
        };
        if effective.is_empty() {
            Vec::new()
        } else {
            vec![("fields".to_string(), effective.join(","))]
        }
    }
}

impl std::fmt::Debug for VimeoApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VimeoApiClient")
            .field("base_uri", &self.base_uri)
            .field("list_timeout", &self.list_timeout)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}
