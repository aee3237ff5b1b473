//! Common test utilities and helpers
//!
//! Shared factories for the integration suites.

#![allow(dead_code)]

use std::sync::Arc;

use vimeo_utils::{HttpTransport, Settings, VimeoApiClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Initialize test logging
pub fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

/// Settings with a dummy token, suitable for mock-server transports
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.credentials.access_token = "integration-test-token".to_string();
    settings
}

/// Client wired to a wiremock server
pub fn mock_client(server: &MockServer, user_id: Option<u64>) -> VimeoApiClient {
    let transport = HttpTransport::with_base_url(&test_settings(), server.uri())
        .expect("mock server URI is valid");
    VimeoApiClient::new(Arc::new(transport), user_id)
}

/// Envelope body for one listing page of `uris`
pub fn videos_page(page: u64, last: u64, total: u64, uris: &[&str]) -> serde_json::Value {
    let data: Vec<_> = uris
        .iter()
        .map(|uri| serde_json::json!({ "uri": uri, "name": format!("clip {uri}") }))
        .collect();
    let next = (page < last).then(|| format!("/me/videos?page={}", page + 1));
    serde_json::json!({
        "total": total,
        "page": page,
        "per_page": 100,
        "paging": {
            "next": next,
            "previous": null,
            "first": "/me/videos?page=1",
            "last": format!("/me/videos?page={last}")
        },
        "data": data
    })
}

/// Mount a listing page on the server
pub async fn mount_videos_page(server: &MockServer, page: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/me/videos"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
