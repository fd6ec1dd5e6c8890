//! Shared HTTP client for the GitHub REST API
//!
//! The client exposes two primitives that every resource operation goes
//! through:
//!
//! - [`Client::new_request`] builds a request for a path relative to the
//!   base URL, with GitHub's media type, API version and credentials
//! - [`Client::execute`] sends it and decodes the JSON body, returning the
//!   value together with a [`Response`] descriptor
//!
//! There is no retry, caching or rate-limit sleeping here. A call is
//! cancelled by dropping its future; the per-request timeout is configured
//! on the builder.

mod error;
mod response;

use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::{ApiError, Error, ErrorDetail, Result};
pub use response::{Rate, Response, parse_link_header};

use crate::config::ClientConfig;
use crate::projects::ProjectsService;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Media type requested from the API
pub const MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned for every request
pub const API_VERSION: &str = "2022-11-28";

const API_VERSION_HEADER: &str = "x-github-api-version";

/// Default user agent (GitHub rejects requests without one)
pub const DEFAULT_USER_AGENT: &str = concat!("ghprojects/", env!("CARGO_PKG_VERSION"));

/// GitHub REST client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Unauthenticated client against the public API
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Start configuring a client
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .base_url(&config.base_url)
            .user_agent(&config.user_agent);
        if let Some(token) = &config.token {
            builder = builder.token(token);
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Base URL requests are resolved against (always ends with `/`)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Projects (V2) endpoints
    #[must_use]
    pub const fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(self)
    }

    /// Build a request for `path`, relative to the base URL
    ///
    /// The path is appended as given; escaping is left to the URL parser.
    /// `body`, when present, is sent as JSON.
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static(MEDIA_TYPE))
            .header(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }

    /// Send `request` and decode the JSON body as `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<(T, Response)> {
        let (body, response) = self.round_trip(request).await?;
        let value = serde_json::from_str(&body)?;
        Ok((value, response))
    }

    /// Send `request` and discard the body
    pub async fn execute_empty(&self, request: Request) -> Result<Response> {
        let (_, response) = self.round_trip(request).await?;
        Ok(response)
    }

    async fn round_trip(&self, request: Request) -> Result<(String, Response)> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{method} {url}");

        let raw = self.http.execute(request).await?;
        let response = Response::from_parts(raw.status(), raw.headers());
        let body = raw.text().await?;
        debug!("{method} {url} -> {}", response.status);

        if response.rate.is_exhausted() {
            warn!(
                "rate limit exhausted, resets at {}",
                response
                    .rate
                    .reset
                    .map_or_else(|| "unknown".to_string(), |t| t.to_rfc3339())
            );
        }

        if !response.status.is_success() {
            return Err(ApiError::from_body(method, url, response, &body).into());
        }

        Ok((body, response))
    }
}

/// Builder for [`Client`]
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    token: Option<String>,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Builder with the public API endpoint and no credentials
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// API endpoint, e.g. `https://ghe.example.com/api/v3/`
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Personal access token or app token, sent as a bearer credential
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// User agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        let mut http = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Client {
            http: http.build()?,
            base_url,
            token: self.token.filter(|t| !t.is_empty()),
        })
    }
}
