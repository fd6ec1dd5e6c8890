//! Project items (issues, pull requests, drafts attached to a project)

use serde::{Deserialize, Serialize};

use super::{Timestamp, User};

/// An entry of a project
///
/// `content` and `fields` are kept as raw JSON; their shape depends on the
/// content type and on the field filter of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectV2Item {
    /// Numeric item ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// GraphQL node ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Node ID of the owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_node_id: Option<String>,
    /// Node ID of the linked issue or pull request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_node_id: Option<String>,
    /// "Issue", "PullRequest" or "DraftIssue"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Account that added the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    /// When the item was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// When the item was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// When the item was archived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<Timestamp>,
    /// API URL of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
    /// API URL of the owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    /// Linked issue / pull request payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    /// Field values, restricted by the `fields` filter when one was sent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<serde_json::Value>,
}

impl ProjectV2Item {
    /// Whether the item is archived
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}
