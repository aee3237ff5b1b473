//! Video representations
//!
//! Status enumerations are closed sets taken from the Vimeo API reference;
//! this crate only ever reads them, never writes them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    /// Transcoding finished, the video is ready for playback
    Available,
    /// Upload finished, transcoding is about to start
    TranscodeStarting,
    /// Transcoding in progress
    Transcoding,
    /// Transcoding failed; terminal
    TranscodingError,
    /// The video exists but cannot be served
    Unavailable,
    /// Upload in progress
    Uploading,
    /// Upload failed; terminal
    UploadingError,
}

impl VideoStatus {
    /// Whether this status is a terminal error for availability polling
    pub fn is_error(self) -> bool {
        matches!(self, Self::TranscodingError | Self::UploadingError)
    }
}

/// Transcode sub-status of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscodeStatus {
    /// Transcoding finished successfully
    Complete,
    /// Transcoding failed
    Error,
    /// Transcoding still running
    InProgress,
}

/// The `transcode` object of a video representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcode {
    /// Current transcoding state
    pub status: TranscodeStatus,
}

/// One entry of a video's `download` list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Rendition quality tag (`hd`, `sd`, `source`, ...)
    pub quality: String,

    /// Frame height in pixels; absent for some source renditions
    #[serde(default)]
    pub height: Option<u32>,

    /// Frame width in pixels
    #[serde(default)]
    pub width: Option<u32>,

    /// Direct download URL
    pub link: String,

    /// File size in bytes
    #[serde(default)]
    pub size: Option<u64>,
}

/// Full video representation
///
/// Requested with the default 11-field filter of
/// [`VimeoApiClient::get_video`](crate::api::VimeoApiClient::get_video);
/// narrower filters leave the untouched fields `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Canonical video URI (`/videos/{id}`)
    #[serde(default)]
    pub uri: Option<String>,

    /// Title
    #[serde(default)]
    pub name: Option<String>,

    /// Description text
    #[serde(default)]
    pub description: Option<String>,

    /// Public link
    #[serde(default)]
    pub link: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,

    /// Privacy settings, left opaque
    #[serde(default)]
    pub privacy: Option<serde_json::Value>,

    /// Download renditions; only present when downloads are enabled and ready
    #[serde(default)]
    pub download: Option<Vec<DownloadLink>>,

    /// Lifecycle status
    #[serde(default)]
    pub status: Option<VideoStatus>,

    /// Upload state, left opaque
    #[serde(default)]
    pub upload: Option<serde_json::Value>,

    /// Transcode state
    #[serde(default)]
    pub transcode: Option<Transcode>,

    /// Whether the video can already be played back
    #[serde(default)]
    pub is_playable: Option<bool>,
}

/// Slim listing entry returned by the videos listing accessors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    /// Canonical video URI
    pub uri: String,

    /// Title
    #[serde(default)]
    pub name: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,

    /// Lifecycle status
    #[serde(default)]
    pub status: Option<VideoStatus>,
}
