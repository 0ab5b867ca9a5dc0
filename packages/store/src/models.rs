//! # Domain models for users and projects
//!
//! Plain, serializable records handed to the rendering layer. Both types use
//! camelCase field names on the wire so the page props look the same as the
//! JSON the browser-side code has always consumed (`projectName`, `userId`,
//! `emailVerified`, ...).
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The owner of a project. Only read here; created by the auth flow. |
//! | [`Project`] | A saved editor document. `markup` is the serialized component tree and may be missing; `user` is only filled in when the owner was loaded alongside it. |
//!
//! Server builds map database rows onto these structs; see `api::models`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity record of a project owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project saved from the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Serialized editor state (JSON text). `None` or empty means the
    /// project has nothing to show.
    pub markup: Option<String>,
    pub user_id: i64,
    pub project_name: String,
    pub public: bool,
    pub validated: bool,
    /// Owning user, present when loaded with it.
    #[serde(default)]
    pub user: Option<User>,
}

impl Project {
    /// Markup text if the project actually has some.
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref().filter(|m| !m.is_empty())
    }

    /// Path identifier for this project, e.g. `"42-MyProject"`.
    pub fn slug(&self) -> String {
        crate::slug::project_slug(self.id, &self.project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(markup: Option<&str>) -> Project {
        let now = Utc::now();
        Project {
            id: 7,
            created_at: now,
            updated_at: now,
            markup: markup.map(str::to_string),
            user_id: 1,
            project_name: "Landing".to_string(),
            public: true,
            validated: false,
            user: None,
        }
    }

    #[test]
    fn test_markup_empty_is_missing() {
        assert_eq!(project(None).markup(), None);
        assert_eq!(project(Some("")).markup(), None);
        assert_eq!(project(Some("{}")).markup(), Some("{}"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(project(Some("{}"))).unwrap();
        assert_eq!(value["projectName"], "Landing");
        assert_eq!(value["userId"], 1);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("project_name").is_none());
    }

    #[test]
    fn test_slug() {
        assert_eq!(project(None).slug(), "7-Landing");
    }
}
