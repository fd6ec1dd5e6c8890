//! Tests for option encoding and request payloads

use ghprojects::client::Response;
use ghprojects::options::add_options;
use ghprojects::{
    AddProjectItemOptions, Error, FieldValueUpdate, GetProjectItemOptions,
    ListProjectItemsOptions, ListProjectsOptions, PaginationOptions, UpdateProjectItemOptions,
};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, LINK};
use serde::Serialize;
use serde_json::json;

fn pairs(query: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(query).unwrap()
}

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

// =============================================================================
// QUERY ENCODING
// =============================================================================

#[test]
fn test_after_only_emits_only_after() {
    let opts = PaginationOptions {
        after: Some("Y3Vyc29yOjE=".to_string()),
        ..PaginationOptions::default()
    };
    let query = serde_urlencoded::to_string(&opts).unwrap();

    assert_eq!(pairs(&query), vec![pair("after", "Y3Vyc29yOjE=")]);
    assert!(!query.contains("before"));
    assert!(!query.contains("per_page"));
}

#[test]
fn test_field_filter_is_comma_joined() {
    let opts = GetProjectItemOptions {
        fields: vec![1, 2, 3],
    };
    let query = serde_urlencoded::to_string(&opts).unwrap();

    assert_eq!(pairs(&query), vec![pair("fields", "1,2,3")]);
}

#[test]
fn test_empty_field_filter_is_omitted() {
    let query = serde_urlencoded::to_string(GetProjectItemOptions::default()).unwrap();
    assert!(query.is_empty());
}

#[test]
fn test_zero_per_page_is_still_sent() {
    let opts = PaginationOptions {
        per_page: Some(0),
        ..PaginationOptions::default()
    };
    assert_eq!(serde_urlencoded::to_string(&opts).unwrap(), "per_page=0");
}

#[test]
fn test_before_and_after_together_are_accepted() {
    let opts = PaginationOptions {
        before: Some("b".to_string()),
        after: Some("a".to_string()),
        per_page: None,
    };
    let path = add_options("orgs/o/projectsV2", Some(&opts)).unwrap();
    assert_eq!(path, "orgs/o/projectsV2?before=b&after=a");
}

#[test]
fn test_list_projects_options_wire_names() {
    let opts = ListProjectsOptions {
        pagination: PaginationOptions {
            before: None,
            after: Some("c".to_string()),
            per_page: Some(50),
        },
        query: Some("is:open roadmap".to_string()),
    };
    let query = serde_urlencoded::to_string(&opts).unwrap();

    assert_eq!(
        pairs(&query),
        vec![pair("after", "c"), pair("per_page", "50"), pair("q", "is:open roadmap")]
    );
}

#[test]
fn test_list_items_options_wire_names() {
    let opts = ListProjectItemsOptions {
        pagination: PaginationOptions {
            per_page: Some(10),
            ..PaginationOptions::default()
        },
        query: None,
        fields: vec![7, 8],
    };
    let query = serde_urlencoded::to_string(&opts).unwrap();

    assert_eq!(pairs(&query), vec![pair("per_page", "10"), pair("fields", "7,8")]);
}

// =============================================================================
// add_options
// =============================================================================

#[test]
fn test_add_options_none_keeps_path() {
    let path = add_options::<ListProjectsOptions>("users/u/projectsV2", None).unwrap();
    assert_eq!(path, "users/u/projectsV2");
}

#[test]
fn test_add_options_unset_keeps_path() {
    let path = add_options("users/u/projectsV2", Some(&ListProjectsOptions::default())).unwrap();
    assert_eq!(path, "users/u/projectsV2");
}

#[test]
fn test_add_options_appends_to_existing_query() {
    let opts = GetProjectItemOptions { fields: vec![5] };
    let path = add_options("users/u/projectsV2/1/items/2?x=1", Some(&opts)).unwrap();
    assert_eq!(path, "users/u/projectsV2/1/items/2?x=1&fields=5");
}

#[derive(Serialize)]
struct Nested {
    inner: Inner,
}

#[derive(Serialize)]
struct Inner {
    value: u32,
}

#[test]
fn test_add_options_reports_unsupported_values() {
    let opts = Nested {
        inner: Inner { value: 1 },
    };
    let err = add_options("orgs/o/projectsV2", Some(&opts)).unwrap_err();

    assert!(matches!(err, Error::Encode(_)));
    assert!(err.status_code().is_none());
    assert!(err.to_string().contains("encode"));
}

// =============================================================================
// JSON BODIES
// =============================================================================

#[test]
fn test_update_archived_only_has_no_fields_key() {
    let body = serde_json::to_value(UpdateProjectItemOptions::archived(true)).unwrap();
    assert_eq!(body, json!({ "archived": true }));
}

#[test]
fn test_update_fields_only_has_no_archived_key() {
    let opts = UpdateProjectItemOptions {
        archived: None,
        fields: Some(vec![FieldValueUpdate {
            id: 7,
            value: json!("Done"),
        }]),
    };
    let body = serde_json::to_value(opts).unwrap();
    assert_eq!(body, json!({ "fields": [ { "id": 7, "value": "Done" } ] }));
}

#[test]
fn test_update_unarchive_sends_false() {
    let body = serde_json::to_value(UpdateProjectItemOptions::archived(false)).unwrap();
    assert_eq!(body, json!({ "archived": false }));
}

#[test]
fn test_empty_update_is_empty_object() {
    let body = serde_json::to_value(UpdateProjectItemOptions::default()).unwrap();
    assert_eq!(body, json!({}));
}

#[test]
fn test_add_item_payload() {
    assert_eq!(
        serde_json::to_value(AddProjectItemOptions::issue(42)).unwrap(),
        json!({ "type": "Issue", "id": 42 })
    );
    assert_eq!(
        serde_json::to_value(AddProjectItemOptions::pull_request(7)).unwrap(),
        json!({ "type": "PullRequest", "id": 7 })
    );
}

#[test]
fn test_add_item_type_is_not_validated() {
    let opts = AddProjectItemOptions::new("DraftIssue", 1);
    assert_eq!(serde_json::to_value(opts).unwrap()["type"], "DraftIssue");
}

// =============================================================================
// CURSOR FOLLOWING
// =============================================================================

fn response_with_link(link: &str) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(LINK, HeaderValue::from_str(link).unwrap());
    Response::from_parts(StatusCode::OK, &headers)
}

#[test]
fn test_next_page_copies_after_and_clears_before() {
    let current = PaginationOptions {
        before: Some("old".to_string()),
        after: None,
        per_page: Some(25),
    };
    let response = response_with_link(
        r#"<https://api.github.com/orgs/o/projectsV2?after=NEXT&per_page=25>; rel="next""#,
    );

    let next = current.next_page(&response).unwrap();
    assert_eq!(next.after.as_deref(), Some("NEXT"));
    assert!(next.before.is_none());
    assert_eq!(next.per_page, Some(25));
}

#[test]
fn test_previous_page_copies_before() {
    let response = response_with_link(
        r#"<https://api.github.com/orgs/o/projectsV2?before=PREV>; rel="prev""#,
    );

    let prev = PaginationOptions::default().previous_page(&response).unwrap();
    assert_eq!(prev.before.as_deref(), Some("PREV"));
    assert!(prev.after.is_none());
}

#[test]
fn test_last_page_has_no_next() {
    let response = Response::from_parts(StatusCode::OK, &HeaderMap::new());
    assert!(PaginationOptions::default().next_page(&response).is_none());
}
