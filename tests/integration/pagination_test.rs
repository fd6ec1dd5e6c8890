//! Cursor pagination and response metadata

use ghprojects::{ListProjectsOptions, PaginationOptions};

use crate::common::fixtures;
use crate::common::{MockResponse, MockServer};

fn link(query: &str, rel: &str) -> String {
    format!("<https://api.github.com/orgs/octo-org/projectsV2?{query}>; rel=\"{rel}\"")
}

#[tokio::test]
async fn test_link_header_exposes_cursors() {
    let header = format!(
        "{}, {}",
        link("per_page=1&after=Y3Vyc29yOjI%3D", "next"),
        link("per_page=1&before=Y3Vyc29yOjE%3D", "prev"),
    );
    let server = MockServer::start(vec![
        MockResponse::ok(fixtures::array([fixtures::project_json(1, "Roadmap")]))
            .with_header("Link", &header),
    ]);
    let client = server.client();

    let (_, response) = client
        .projects()
        .list_organization_projects("octo-org", None)
        .await
        .unwrap();

    assert_eq!(response.after.as_deref(), Some("Y3Vyc29yOjI="));
    assert_eq!(response.before.as_deref(), Some("Y3Vyc29yOjE="));
    assert!(response.has_next());
}

#[tokio::test]
async fn test_last_page_has_no_next_cursor() {
    let server = MockServer::start(vec![MockResponse::ok("[]")]);
    let client = server.client();

    let (_, response) = client
        .projects()
        .list_organization_projects("octo-org", None)
        .await
        .unwrap();

    assert_eq!(response.after, None);
    assert_eq!(response.before, None);
    assert!(!response.has_next());
}

#[tokio::test]
async fn test_walk_pages_with_next_page() {
    let next = link("per_page=1&after=CURSOR", "next");
    let server = MockServer::start(vec![
        MockResponse::ok(fixtures::array([fixtures::project_json(1, "Roadmap")]))
            .with_header("Link", &next),
        MockResponse::ok(fixtures::array([fixtures::project_json(2, "Bugs")])),
    ]);
    let client = server.client();
    let projects = client.projects();

    let mut opts = ListProjectsOptions {
        pagination: PaginationOptions {
            per_page: Some(1),
            ..PaginationOptions::default()
        },
        query: None,
    };
    let mut titles = Vec::new();
    loop {
        let (page, response) = projects
            .list_organization_projects("octo-org", Some(&opts))
            .await
            .unwrap();
        titles.extend(page.into_iter().filter_map(|p| p.title));
        match opts.pagination.next_page(&response) {
            Some(next) => opts.pagination = next,
            None => break,
        }
    }

    assert_eq!(titles, ["Roadmap", "Bugs"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query(), "per_page=1");
    assert_eq!(requests[1].query(), "after=CURSOR&per_page=1");
}

#[tokio::test]
async fn test_cursor_conflict_is_one_round_trip() {
    let server = MockServer::start(vec![MockResponse::error(400, "Bad Request")]);
    let client = server.client();
    let opts = ListProjectsOptions {
        pagination: PaginationOptions {
            before: Some("b".to_string()),
            after: Some("a".to_string()),
            per_page: Some(10),
        },
        query: None,
    };

    let err = client
        .projects()
        .list_user_projects("octocat", Some(&opts))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert_eq!(server.requests().len(), 1);
    assert_eq!(
        server.only_request().query_pairs(),
        vec![
            ("before".to_string(), "b".to_string()),
            ("after".to_string(), "a".to_string()),
            ("per_page".to_string(), "10".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_rate_headers_are_parsed() {
    let server = MockServer::start(vec![
        MockResponse::ok("[]")
            .with_header("X-RateLimit-Limit", "5000")
            .with_header("X-RateLimit-Remaining", "4987")
            .with_header("X-RateLimit-Reset", "1700000000"),
    ]);
    let client = server.client();

    let (_, response) = client
        .projects()
        .list_user_projects("octocat", None)
        .await
        .unwrap();

    assert_eq!(response.rate.limit, Some(5_000));
    assert_eq!(response.rate.remaining, Some(4_987));
    assert_eq!(response.rate.reset.map(|t| t.timestamp()), Some(1_700_000_000));
    assert!(!response.rate.is_exhausted());
}

#[tokio::test]
async fn test_rate_limit_error_keeps_response() {
    let server = MockServer::start(vec![
        MockResponse::error(403, "API rate limit exceeded")
            .with_header("X-RateLimit-Limit", "60")
            .with_header("X-RateLimit-Remaining", "0")
            .with_header("X-RateLimit-Reset", "1700000000"),
    ]);
    let client = server.client();

    let err = client
        .projects()
        .list_user_projects("octocat", None)
        .await
        .unwrap_err();

    let response = err.response().unwrap();
    assert_eq!(response.status.as_u16(), 403);
    assert!(response.rate.is_exhausted());
    assert!(err.to_string().contains("API rate limit exceeded"));
}
