//! Video accessors and derived conveniences
//!
//! Besides the one-request-per-call accessors, this module carries the
//! three derived helpers: the concurrent multi-page collector
//! ([`VimeoApiClient::get_all_videos`]), the availability poller
//! ([`VimeoApiClient::block_until_available`]), and the best-quality
//! download link selector ([`select_download_link`]).

use std::path::Path;
use std::time::Duration;

use futures::{StreamExt, stream};
use serde_json::Value;

use crate::api::VimeoApiClient;
use crate::types::{DownloadLink, Page, TranscodeStatus, Video, VideoStatus, VideoSummary};
use crate::utils::extract_page_number;
use crate::{Error, Result};

/// Default field selection for [`VimeoApiClient::get_video`]
const VIDEO_FIELDS: &[&str] = &[
    "uri",
    "name",
    "description",
    "link",
    "created_time",
    "privacy",
    "download",
    "status",
    "upload",
    "transcode",
    "is_playable",
];

/// Field selection for listing entries
const LISTING_FIELDS: &[&str] = &["uri", "name", "created_time", "status"];

/// Listing page size; the API maximum
const PER_PAGE: u32 = 100;

/// Upper bound on in-flight page requests during `get_all_videos`
const MAX_CONCURRENT_PAGE_FETCHES: usize = 6;

/// Options for [`VimeoApiClient::block_until_available_with`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PollOptions {
    /// Time between polls; `None` uses the client's configured interval
    pub interval: Option<Duration>,
    /// Give up after this many polls; `None` polls until a terminal status
    pub max_polls: Option<u32>,
}

impl PollOptions {
    /// Create options with the client defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the poll interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the poll ceiling
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(max_polls);
        self
    }
}

/// Pick the best-quality download URL from a video's `download` list
///
/// Prefers the highest-`height` HD rendition; falls back to the
/// highest-`height` SD rendition; `None` when neither exists. Absence is an
/// expected outcome for videos without ready downloads, not an error.
pub fn select_download_link(downloads: &[DownloadLink]) -> Option<&str> {
    let best = |quality: &str| {
        downloads
            .iter()
            .filter(|d| d.quality == quality)
            .max_by_key(|d| d.height.unwrap_or(0))
            .map(|d| d.link.as_str())
    };
    best("hd").or_else(|| best("sd"))
}

impl VimeoApiClient {
    /// Upload a video via the transport's resumable upload flow
    ///
    /// Returns the URI of the created video.
    pub async fn upload_video(&self, file_path: &Path, params: &Value) -> Result<String> {
        self.transport().upload(file_path, params).await
    }

    /// Return a video's info with sane field defaults
    pub async fn get_video(&self, video_uri: &str, fields: Option<&[&str]>) -> Result<Video> {
        let query = Self::fields_param(fields, VIDEO_FIELDS);
        let response = self
            .transport()
            .get(video_uri, &query, None)
            .await?
            .error_for_status(video_uri)?;
        response.json()
    }

    /// Edit a video
    pub async fn edit_video(&self, video_uri: &str, params: &Value) -> Result<Video> {
        let response = self
            .transport()
            .patch(video_uri, params)
            .await?
            .error_for_status(video_uri)?;
        response.json()
    }

    /// Delete a video
    pub async fn delete_video(&self, video_uri: &str) -> Result<()> {
        self.transport()
            .delete(video_uri, &[])
            .await?
            .error_for_status(video_uri)?;
        Ok(())
    }

    /// Get a single page of videos, 100 max
    pub async fn get_videos(&self, page: u64) -> Result<Page<VideoSummary>> {
        let path = format!("{}/videos", self.base_uri());
        let query = vec![
            ("fields".to_string(), LISTING_FIELDS.join(",")),
            ("page".to_string(), page.to_string()),
            ("per_page".to_string(), PER_PAGE.to_string()),
        ];
        let response = self
            .transport()
            .get(&path, &query, Some(self.list_timeout()))
            .await?
            .error_for_status(&path)?;
        response.json()
    }

    /// Get all videos across every listing page
    ///
    /// Page 1 is fetched first to learn the page count; the remaining pages
    /// are fetched with at most six concurrent requests and appended in
    /// completion order, which is not page order. Returns the union of all
    /// records; no dedup is performed.
    pub async fn get_all_videos(&self) -> Result<Vec<VideoSummary>> {
        let first = self.get_videos(1).await?;
        let total = first.total;
        let mut videos = first.data;

        let paging = first.paging.unwrap_or_default();
        let next_page = extract_page_number(paging.next.as_deref().unwrap_or(""));
        let last_page = extract_page_number(paging.last.as_deref().unwrap_or(""));

        if last_page > 1 {
            tracing::debug!(next_page, last_page, total, "fanning out page fetches");
            let mut pages = stream::iter(next_page..=last_page)
                .map(|page| self.get_videos(page))
                .buffer_unordered(MAX_CONCURRENT_PAGE_FETCHES);
            while let Some(page) = pages.next().await {
                videos.extend(page?.data);
            }
        }

        tracing::debug!(count = videos.len(), "collected all videos");
        Ok(videos)
    }

    /// Get the best-quality download link for a video, HD first
    pub async fn get_download_link(&self, video_uri: &str) -> Result<Option<String>> {
        let video = self.get_video(video_uri, Some(&["download"])).await?;
        Ok(video
            .download
            .as_deref()
            .and_then(select_download_link)
            .map(str::to_string))
    }

    /// Get a video's lifecycle status
    pub async fn get_status(&self, video_uri: &str) -> Result<VideoStatus> {
        let video = self.get_video(video_uri, Some(&["status"])).await?;
        video
            .status
            .ok_or_else(|| Error::missing_field("status", video_uri))
    }

    /// Get a video's transcode status
    pub async fn get_transcode_status(&self, video_uri: &str) -> Result<TranscodeStatus> {
        let video = self.get_video(video_uri, Some(&["transcode"])).await?;
        video
            .transcode
            .map(|t| t.status)
            .ok_or_else(|| Error::missing_field("transcode", video_uri))
    }

    /// Whether the video's status is `available`
    pub async fn is_available(&self, video_uri: &str) -> Result<bool> {
        Ok(self.get_status(video_uri).await? == VideoStatus::Available)
    }

    /// Whether the video's transcode status is `complete`
    pub async fn is_transcode_complete(&self, video_uri: &str) -> Result<bool> {
        Ok(self.get_transcode_status(video_uri).await? == TranscodeStatus::Complete)
    }

    /// Whether the video can already be played back
    pub async fn is_playable(&self, video_uri: &str) -> Result<bool> {
        let video = self.get_video(video_uri, Some(&["is_playable"])).await?;
        video
            .is_playable
            .ok_or_else(|| Error::missing_field("is_playable", video_uri))
    }

    /// Block until the video is available, polling at the configured
    /// interval
    ///
    /// Unbounded: only a terminal status (or a transport failure) ends the
    /// loop. Use [`block_until_available_with`](Self::block_until_available_with)
    /// to bound it.
    pub async fn block_until_available(&self, video_uri: &str) -> Result<()> {
        self.block_until_available_with(video_uri, PollOptions::default())
            .await
    }

    /// Block until the video is available, with explicit poll options
    ///
    /// `available` ends the loop; `transcoding_error` and `uploading_error`
    /// fail with [`Error::Transcoding`]; any other status sleeps and
    /// retries. With a `max_polls` ceiling, exhausting it fails with
    /// [`Error::PollTimeout`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use std::time::Duration;
    /// # use vimeo_utils::{PollOptions, Settings, VimeoApiClient};
    /// # tokio_test::block_on(async {
    /// let client = VimeoApiClient::from_settings(&Settings::from_env()?)?;
    /// let options = PollOptions::new()
    ///     .with_interval(Duration::from_secs(10))
    ///     .with_max_polls(30);
    /// client.block_until_available_with("/videos/123", options).await?;
    /// # Ok::<(), vimeo_utils::Error>(())
    /// # });
    /// ```
    pub async fn block_until_available_with(
        &self,
        video_uri: &str,
        options: PollOptions,
    ) -> Result<()> {
        let interval = options.interval.unwrap_or_else(|| self.poll_interval());
        let mut polls = 0u32;

        loop {
            let status = self.get_status(video_uri).await?;
            polls += 1;

            match status {
                VideoStatus::Available => {
                    tracing::info!(uri = video_uri, polls, "video available");
                    return Ok(());
                }
                status if status.is_error() => {
                    tracing::error!(uri = video_uri, ?status, "terminal error while polling");
                    return Err(Error::transcoding(video_uri, status));
                }
                status => {
                    tracing::debug!(uri = video_uri, ?status, polls, "video not ready yet");
                }
            }

            if let Some(max_polls) = options.max_polls {
                if polls >= max_polls {
                    return Err(Error::poll_timeout(video_uri, polls));
                }
            }
            tokio::time::sleep(interval).await;
        }
    }

    /// Add a domain to the video's embed whitelist
    pub async fn add_domain_to_whitelist(&self, video_uri: &str, domain: &str) -> Result<()> {
        let path = format!("{}/privacy/domains/{}", video_uri, domain);
        self.transport().put(&path).await?.error_for_status(&path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::mock_client;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dl(quality: &str, height: Option<u32>, link: &str) -> DownloadLink {
        DownloadLink {
            quality: quality.to_string(),
            height,
            width: None,
            link: link.to_string(),
            size: None,
        }
    }

    #[test]
    fn selector_prefers_highest_hd() {
        let downloads = vec![
            dl("hd", Some(720), "A"),
            dl("hd", Some(1080), "B"),
            dl("sd", Some(480), "C"),
        ];
        assert_eq!(select_download_link(&downloads), Some("B"));
    }

    #[test]
    fn selector_falls_back_to_highest_sd() {
        let downloads = vec![dl("sd", Some(360), "low"), dl("sd", Some(480), "high")];
        assert_eq!(select_download_link(&downloads), Some("high"));
    }

    #[test]
    fn selector_ignores_other_qualities() {
        let downloads = vec![dl("source", Some(2160), "source-link")];
        assert_eq!(select_download_link(&downloads), None);
        assert_eq!(select_download_link(&[]), None);
    }

    #[test]
    fn selector_treats_missing_height_as_zero() {
        let downloads = vec![dl("hd", None, "no-height"), dl("hd", Some(720), "720p")];
        assert_eq!(select_download_link(&downloads), Some("720p"));
    }

    fn status_body(status: &str) -> serde_json::Value {
        serde_json::json!({ "status": status })
    }

    #[tokio::test]
    async fn get_videos_sends_listing_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/videos"))
            .and(query_param("fields", "uri,name,created_time,status"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 150,
                "page": 2,
                "per_page": 100,
                "paging": { "next": null, "last": "/me/videos?page=2" },
                "data": [{ "uri": "/videos/201", "name": "clip" }]
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        let page = client.get_videos(2).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.data[0].uri, "/videos/201");
    }

    #[tokio::test]
    async fn get_all_videos_single_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/videos"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 1,
                "page": 1,
                "per_page": 100,
                "paging": { "next": null, "last": "/me/videos?page=1" },
                "data": [{ "uri": "/videos/1" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        let videos = client.get_all_videos().await.unwrap();
        assert_eq!(videos.len(), 1);
    }

    #[tokio::test]
    async fn get_all_videos_collects_three_pages() {
        let server = MockServer::start().await;
        for (page, uris) in [
            (1, vec!["/videos/1", "/videos/2"]),
            (2, vec!["/videos/3"]),
            (3, vec!["/videos/4", "/videos/5"]),
        ] {
            let data: Vec<_> = uris
                .iter()
                .map(|uri| serde_json::json!({ "uri": uri }))
                .collect();
            let next = (page < 3).then(|| format!("/me/videos?page={}", page + 1));
            Mock::given(method("GET"))
                .and(path("/me/videos"))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "total": 5,
                    "page": page,
                    "per_page": 100,
                    "paging": { "next": next, "last": "/me/videos?page=3" },
                    "data": data
                })))
                .mount(&server)
                .await;
        }

        let client = mock_client(&server, None);
        let mut uris: Vec<_> = client
            .get_all_videos()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.uri)
            .collect();
        uris.sort();
        assert_eq!(
            uris,
            vec!["/videos/1", "/videos/2", "/videos/3", "/videos/4", "/videos/5"]
        );
    }

    #[tokio::test]
    async fn poller_returns_on_available() {
        let server = MockServer::start().await;
        for status in ["uploading", "transcoding"] {
            Mock::given(method("GET"))
                .and(path("/videos/1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(status_body(status)))
                .up_to_n_times(1)
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/videos/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("available")))
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        client.block_until_available("/videos/1").await.unwrap();
    }

    #[tokio::test]
    async fn poller_fails_on_uploading_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("uploading")))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/videos/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("uploading_error")))
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        let err = client.block_until_available("/videos/1").await.unwrap_err();
        match err {
            Error::Transcoding { status, .. } => {
                assert_eq!(status, VideoStatus::UploadingError);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn poller_honors_max_polls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("transcoding")))
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        let err = client
            .block_until_available_with("/videos/1", PollOptions::new().with_max_polls(3))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PollTimeout { polls: 3, .. }));
    }

    #[tokio::test]
    async fn status_helpers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos/9"))
            .and(query_param("fields", "status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("available")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/videos/9"))
            .and(query_param("fields", "transcode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transcode": { "status": "complete" }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/videos/9"))
            .and(query_param("fields", "is_playable"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"is_playable": true})),
            )
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        assert!(client.is_available("/videos/9").await.unwrap());
        assert!(client.is_transcode_complete("/videos/9").await.unwrap());
        assert!(client.is_playable("/videos/9").await.unwrap());
    }

    #[tokio::test]
    async fn delete_video_accepts_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/videos/5"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        client.delete_video("/videos/5").await.unwrap();
    }

    #[tokio::test]
    async fn whitelist_put_builds_domain_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/videos/5/privacy/domains/example.com"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        client
            .add_domain_to_whitelist("/videos/5", "example.com")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn download_link_absent_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos/7"))
            .and(query_param("fields", "download"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = mock_client(&server, None);
        assert_eq!(client.get_download_link("/videos/7").await.unwrap(), None);
    }
}
