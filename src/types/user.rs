//! User representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User representation, as filtered by the default field list of
/// [`VimeoApiClient::get_user`](crate::api::VimeoApiClient::get_user)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Canonical user URI (`/users/{id}`)
    #[serde(default)]
    pub uri: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Public profile link
    #[serde(default)]
    pub link: Option<String>,

    /// Free-form location
    #[serde(default)]
    pub location: Option<String>,

    /// Long-form bio
    #[serde(default)]
    pub bio: Option<String>,

    /// Short bio
    #[serde(default)]
    pub short_bio: Option<String>,

    /// Account creation timestamp
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
}
