//! vimeo-utils - Async convenience wrapper around the Vimeo REST API
//!
//! Per-resource helper methods (users, videos, projects/folders, embed
//! presets) with sane default field selections, fail-on-non-2xx semantics,
//! and a few derived conveniences: concurrent multi-page listing, "wait
//! until the video is playable" polling, and "pick the best-quality
//! download link" selection.
//!
//! # Features
//!
//! - **Resource accessors**: one request per call, default field filters,
//!   any non-2xx status is an error
//! - **Paginated collector**: `get_all_videos` fans out the remaining pages
//!   with at most six concurrent requests
//! - **Availability poller**: `block_until_available` with an optional
//!   caller-supplied ceiling
//! - **Transport seam**: the verb primitives live behind a trait, so tests
//!   run against mock servers or scripted transports
//!
//! # Examples
//!
//! ```rust,no_run
//! use vimeo_utils::{Settings, VimeoApiClient};
//!
//! # tokio_test::block_on(async {
//! let settings = Settings::from_env()?;
//! let client = VimeoApiClient::from_settings(&settings)?;
//!
//! let user = client.get_user(None).await?;
//! println!("{:?}", user.name);
//!
//! let videos = client.get_all_videos().await?;
//! println!("{} videos", videos.len());
//!
//! if let Some(link) = client.get_download_link("/videos/123").await? {
//!     println!("best download: {link}");
//! }
//! # Ok::<(), vimeo_utils::Error>(())
//! # });
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod utils;

pub use api::{PollOptions, VimeoApiClient, videos::select_download_link};
pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use transport::{ApiResponse, HttpTransport, Transport};
pub use types::{
    DownloadLink, Page, Paging, Project, Transcode, TranscodeStatus, User, Video, VideoStatus,
    VideoSummary,
};
pub use utils::{build_user_uri, extract_page_number};
