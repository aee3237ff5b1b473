//! Project (folder) accessors

use crate::api::VimeoApiClient;
use crate::types::{Page, Project, VideoSummary};
use crate::Result;

/// Default field selection for project representations
const PROJECT_FIELDS: &[&str] = &["uri", "name"];

impl VimeoApiClient {
    /// Create a new project
    pub async fn create_project(
        &self,
        name: &str,
        parent_folder_uri: Option<&str>,
        fields: Option<&[&str]>,
    ) -> Result<Project> {
        let path = format!("{}/projects", self.base_uri());
        let query = Self::fields_param(fields, PROJECT_FIELDS);
        let body = serde_json::json!({
            "name": name,
            "parent_folder_uri": parent_folder_uri,
        });
        let response = self
            .transport()
            .post(&path, &query, &body)
            .await?
            .error_for_status(&path)?;
        response.json()
    }

    /// Return a project with sane field defaults
    pub async fn get_project(&self, project_id: &str, fields: Option<&[&str]>) -> Result<Project> {
        let path = format!("{}/projects/{}", self.base_uri(), project_id);
        let query = Self::fields_param(fields, PROJECT_FIELDS);
        let response = self
            .transport()
            .get(&path, &query, None)
            .await?
            .error_for_status(&path)?;
        response.json()
    }

    /// Rename a project
    pub async fn edit_project(&self, project_id: &str, name: &str) -> Result<Project> {
        let path = format!("{}/projects/{}", self.base_uri(), project_id);
        let body = serde_json::json!({ "name": name });
        let response = self
            .transport()
            .patch(&path, &body)
            .await?
            .error_for_status(&path)?;
        response.json()
    }

    /// Delete a project
    ///
    /// `should_delete_clips` also removes the videos the project contains.
    pub async fn delete_project(&self, project_id: &str, should_delete_clips: bool) -> Result<()> {
        let path = format!("{}/projects/{}", self.base_uri(), project_id);
        let query = vec![(
            "should_delete_clips".to_string(),
            should_delete_clips.to_string(),
        )];
        self.transport()
            .delete(&path, &query)
            .await?
            .error_for_status(&path)?;
        Ok(())
    }

    /// Return the paginated projects belonging to the user
    ///
    /// `params` are passed through as query parameters (page, per_page,
    /// sort, ...).
    pub async fn get_all_projects(&self, params: &[(String, String)]) -> Result<Page<Project>> {
        let path = format!("{}/projects", self.base_uri());
        let response = self
            .transport()
            .get(&path, params, None)
            .await?
            .error_for_status(&path)?;
        response.json()
    }

    /// Move a video into a project
    ///
    /// The video URI is appended verbatim to the project path, as the API
    /// expects (`/users/{u}/projects/{p}/videos/{v}`).
    pub async fn move_to_project(&self, project_id: &str, video_uri: &str) -> Result<()> {
        let path = format!("{}/projects/{}{}", self.base_uri(), project_id, video_uri);
        self.transport().put(&path).await?.error_for_status(&path)?;
        Ok(())
    }

    /// Get a single listing page of the videos inside a project
    pub async fn get_videos_from_project(&self, project_id: &str) -> Result<Page<VideoSummary>> {
        let path = format!("{}/folders/{}/videos", self.base_uri(), project_id);
        let response = self
            .transport()
            .get(&path, &[], Some(self.list_timeout()))
            .await?
            .error_for_status(&path)?;
        response.json()
    }
}
