//! Embed preset accessors
//!
//! Only the edit operation is wrapped; presets themselves are managed in
//! the Vimeo UI.

use crate::api::VimeoApiClient;
use crate::Result;

impl VimeoApiClient {
    /// Apply an embed preset to a video
    pub async fn edit_embed_preset(&self, video_uri: &str, preset_id: u64) -> Result<()> {
        let path = format!("{}/presets/{}", video_uri, preset_id);
        self.transport().put(&path).await?.error_for_status(&path)?;
        Ok(())
    }
}
