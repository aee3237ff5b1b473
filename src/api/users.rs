//! User accessors

use serde_json::Value;

use crate::api::VimeoApiClient;
use crate::types::User;
use crate::Result;

/// Default field selection for [`VimeoApiClient::get_user`]
const USER_FIELDS: &[&str] = &[
    "uri",
    "name",
    "link",
    "location",
    "bio",
    "short_bio",
    "created_time",
];

impl VimeoApiClient {
    /// Get user info with sane field defaults
    pub async fn get_user(&self, fields: Option<&[&str]>) -> Result<User> {
        let query = Self::fields_param(fields, USER_FIELDS);
        let response = self
            .transport()
            .get(self.base_uri(), &query, None)
            .await?
            .error_for_status(self.base_uri())?;
        response.json()
    }

    /// Edit the user
    ///
    /// `data` is an opaque mapping of user fields to patch; the updated
    /// representation is returned.
    pub async fn edit_user(&self, data: &Value) -> Result<User> {
        let response = self
            .transport()
            .patch(self.base_uri(), data)
            .await?
            .error_for_status(self.base_uri())?;
        response.json()
    }
}
