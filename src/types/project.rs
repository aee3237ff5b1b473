//! Project (folder) representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project representation
///
/// Vimeo calls these "folders" in newer API surfaces; the create/get
/// accessors default to a `{uri, name}` field filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Canonical project URI (`/users/{id}/projects/{id}`)
    #[serde(default)]
    pub uri: Option<String>,

    /// Project name
    #[serde(default)]
    pub name: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
}

impl Project {
    /// Numeric id parsed out of the project URI, if present
    pub fn id(&self) -> Option<&str> {
        self.uri.as_deref().and_then(crate::utils::project_id_from_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_id_from_uri_field() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "uri": "/users/123/projects/456",
            "name": "Test Project"
        }))
        .unwrap();
        assert_eq!(project.id(), Some("456"));

        let bare = Project {
            uri: None,
            name: None,
            created_time: None,
        };
        assert_eq!(bare.id(), None);
    }
}
