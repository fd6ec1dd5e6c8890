//! Project (V2) container

use serde::{Deserialize, Serialize};

use super::{Timestamp, User};

/// A Projects (V2) project owned by an organization or a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectV2 {
    /// Numeric project ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// GraphQL node ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Owning organization or user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    /// Account that created the project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    /// Project title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the project is publicly visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// When the project was closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<Timestamp>,
    /// When the project was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// When the project was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// When the project was deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    /// Human-facing project number, unique per owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// One-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Account that deleted the project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<User>,

    // Fields carried over from classic projects.
    /// API URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Web URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Columns URL (classic projects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_url: Option<String>,
    /// Owner API URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_url: Option<String>,
    /// Project name (classic projects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Project body (classic projects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// State, "open" or "closed"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Baseline permission for organization members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_permission: Option<String>,
    /// Whether the project is private
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl ProjectV2 {
    /// Title for display, falling back to the classic `name`
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(untitled)")
    }
}
