//! Request-side option values and query-string encoding
//!
//! Query options are encoded with `serde_urlencoded` using each field's
//! wire name. Unset (`None`) fields are left out entirely, so `Some(0)` and
//! `Some(false)` still reach the wire. Body payloads (`Add*`, `Update*`) are
//! sent as JSON by the client.
//!
//! Nothing here validates values GitHub validates: both `before` and `after`
//! may be set, and the item `type` is a free string.

use serde::{Serialize, Serializer};

use crate::client::{Response, Result};

/// Cursor pagination shared by every list endpoint
///
/// After the first call, copy `Response::after` into `after` to get the
/// next page and `Response::before` into `before` to get the previous one
/// ([`Self::next_page`] and [`Self::previous_page`] do exactly that).
/// GitHub rejects requests that set both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationOptions {
    /// Only return results before this cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Only return results after this cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Page size (GitHub caps it at 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PaginationOptions {
    /// Options for the page following `response`, if there is one
    #[must_use]
    pub fn next_page(&self, response: &Response) -> Option<Self> {
        response.after.as_ref().map(|after| Self {
            before: None,
            after: Some(after.clone()),
            per_page: self.per_page,
        })
    }

    /// Options for the page preceding `response`, if there is one
    #[must_use]
    pub fn previous_page(&self, response: &Response) -> Option<Self> {
        response.before.as_ref().map(|before| Self {
            before: Some(before.clone()),
            after: None,
            per_page: self.per_page,
        })
    }
}

/// Options for listing projects of an owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListProjectsOptions {
    /// Cursor pagination
    #[serde(flatten)]
    pub pagination: PaginationOptions,
    /// Free-text filter
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Options for listing the items of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListProjectItemsOptions {
    /// Cursor pagination
    #[serde(flatten)]
    pub pagination: PaginationOptions,
    /// Free-text filter
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Only return values of these field IDs
    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<i64>,
}

/// Options for fetching one project item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetProjectItemOptions {
    /// Only return values of these field IDs
    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<i64>,
}

/// Body for adding an issue or pull request to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddProjectItemOptions {
    /// "Issue" or "PullRequest"
    #[serde(rename = "type")]
    pub kind: String,
    /// Numeric ID of the issue or pull request
    pub id: i64,
}

impl AddProjectItemOptions {
    /// Arbitrary content type; GitHub decides whether it is accepted
    #[must_use]
    pub fn new(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    /// Link an issue
    #[must_use]
    pub fn issue(id: i64) -> Self {
        Self::new("Issue", id)
    }

    /// Link a pull request
    #[must_use]
    pub fn pull_request(id: i64) -> Self {
        Self::new("PullRequest", id)
    }
}

/// New value for one field of an item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValueUpdate {
    /// Field ID
    pub id: i64,
    /// New value; its JSON shape depends on the field's data type
    pub value: serde_json::Value,
}

/// Sparse patch for a project item; unset members are not sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProjectItemOptions {
    /// Archive (`true`) or restore (`false`) the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Field values to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldValueUpdate>>,
}

impl UpdateProjectItemOptions {
    /// Patch that only toggles the archived flag
    #[must_use]
    pub const fn archived(archived: bool) -> Self {
        Self {
            archived: Some(archived),
            fields: None,
        }
    }
}

/// Append the encoded `opts` to `path` as a query string
///
/// Returns `path` unchanged when `opts` is `None` or encodes to nothing.
pub fn add_options<T>(path: &str, opts: Option<&T>) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let Some(opts) = opts else {
        return Ok(path.to_string());
    };

    let query = serde_urlencoded::to_string(opts)?;
    if query.is_empty() {
        return Ok(path.to_string());
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{path}{separator}{query}"))
}

fn comma_separated<S: Serializer>(ids: &[i64], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}
