//! Response shape definitions
//!
//! Serde models for the Vimeo representations the accessors consume. Field
//! filters yield partial representations, so almost everything is optional.

pub mod envelope;
pub mod project;
pub mod user;
pub mod video;

pub use envelope::{Page, Paging};
pub use project::Project;
pub use user::User;
pub use video::{DownloadLink, Transcode, TranscodeStatus, Video, VideoStatus, VideoSummary};
