//! Transport-level response descriptor
//!
//! Carries what callers need besides the decoded body: the status, the
//! pagination cursors from the `Link` header and the rate-limit counters.

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, LINK};
use reqwest::{StatusCode, Url};

const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";
const RATE_REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RATE_RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate-limit counters reported with every response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rate {
    /// Requests allowed per window
    pub limit: Option<u32>,
    /// Requests left in the current window
    pub remaining: Option<u32>,
    /// When the current window resets
    pub reset: Option<DateTime<Utc>>,
}

impl Rate {
    /// Read the `X-RateLimit-*` headers
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_value(headers, RATE_LIMIT_HEADER),
            remaining: header_value(headers, RATE_REMAINING_HEADER),
            reset: header_value::<i64>(headers, RATE_RESET_HEADER)
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        }
    }

    /// Whether the window is used up
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

/// Response descriptor returned alongside every decoded value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status
    pub status: StatusCode,
    /// Cursor for the previous page (`before` of the `rel="prev"` link)
    pub before: Option<String>,
    /// Cursor for the next page (`after` of the `rel="next"` link)
    pub after: Option<String>,
    /// Page number of the next page, for page-numbered endpoints
    pub next_page: Option<u32>,
    /// Page number of the previous page
    pub prev_page: Option<u32>,
    /// Page number of the first page
    pub first_page: Option<u32>,
    /// Page number of the last page
    pub last_page: Option<u32>,
    /// Rate-limit counters
    pub rate: Rate,
}

impl Response {
    /// Build the descriptor from status and headers
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: &HeaderMap) -> Self {
        let mut response = Self {
            status,
            before: None,
            after: None,
            next_page: None,
            prev_page: None,
            first_page: None,
            last_page: None,
            rate: Rate::from_headers(headers),
        };

        for value in headers.get_all(LINK) {
            if let Ok(value) = value.to_str() {
                response.apply_links(value);
            }
        }

        response
    }

    /// Whether another page can be requested with [`Self::after`]
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.after.is_some() || self.next_page.is_some()
    }

    fn apply_links(&mut self, header: &str) {
        for (target, rel) in parse_link_header(header) {
            let Ok(url) = Url::parse(target) else {
                continue;
            };
            let param = |name: &str| {
                url.query_pairs()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| value.into_owned())
            };
            let page = param("page").and_then(|p| p.parse().ok());

            match rel {
                "next" => {
                    self.next_page = page;
                    self.after = param("after");
                },
                "prev" => {
                    self.prev_page = page;
                    self.before = param("before");
                },
                "first" => self.first_page = page,
                "last" => self.last_page = page,
                _ => {},
            }
        }
    }
}

/// Split a `Link` header into `(url, rel)` pairs
///
/// Entries look like `<https://api.github.com/...?after=X>; rel="next"`.
/// URLs may themselves contain commas, so entries are delimited by the
/// angle brackets rather than by splitting on `,`. Entries without a `rel`
/// are skipped.
#[must_use]
pub fn parse_link_header(header: &str) -> Vec<(&str, &str)> {
    let mut links = Vec::new();
    let mut rest = header;

    while let Some(start) = rest.find('<') {
        let opened = &rest[start + 1..];
        let Some(end) = opened.find('>') else {
            break;
        };
        let target = &opened[..end];
        let tail = &opened[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());

        let rel = tail[..params_end].split(';').find_map(|attr| {
            attr.trim()
                .strip_prefix("rel=")
                .map(|v| v.trim_end_matches(',').trim().trim_matches('"'))
        });
        if let Some(rel) = rel {
            links.push((target, rel));
        }

        rest = &tail[params_end..];
    }

    links
}

fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
