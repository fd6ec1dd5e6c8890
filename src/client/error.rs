//! Error types for the client
//!
//! Failures are passed through to the caller as they happened: option
//! encoding problems, transport errors, undecodable bodies, and non-2xx
//! answers from GitHub. Nothing is retried or reclassified; a 404 is an
//! [`ApiError`] with status 404 like any other remote error.

use std::fmt;

use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

use super::response::Response;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong during a call
#[derive(Debug, Error)]
pub enum Error {
    /// Query options could not be encoded; raised before any network I/O
    #[error("failed to encode request options: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Transport failure (connection, TLS, timeout, invalid URL)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body that does not match the expected type
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// GitHub answered with a non-2xx status
    #[error(transparent)]
    Api(Box<ApiError>),
}

impl Error {
    /// HTTP status of a remote error, if this is one
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code()),
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    /// Response descriptor of a remote error, if this is one
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Api(err) => Some(&err.response),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(Box::new(err))
    }
}

/// One entry of the `errors` array of a GitHub error body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Resource the error applies to
    #[serde(default)]
    pub resource: Option<String>,
    /// Offending field
    #[serde(default)]
    pub field: Option<String>,
    /// Machine-readable code ("missing", "invalid", ...)
    #[serde(default)]
    pub code: Option<String>,
    /// Free-form message
    #[serde(default)]
    pub message: Option<String>,
}

/// Body shape GitHub uses for 4xx/5xx answers
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    documentation_url: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// A non-2xx answer from GitHub
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Method of the failed request
    pub method: Method,
    /// URL of the failed request
    pub url: Url,
    /// Response descriptor (status, cursors, rate limit)
    pub response: Response,
    /// Error message from the body, or the raw body if it was not JSON
    pub message: String,
    /// Link to the relevant API documentation
    pub documentation_url: Option<String>,
    /// Structured validation errors
    pub errors: Vec<ErrorDetail>,
}

impl ApiError {
    /// Build from a failed response and its body text
    #[must_use]
    pub fn from_body(method: Method, url: Url, response: Response, body: &str) -> Self {
        let (message, documentation_url, errors) = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => (parsed.message, parsed.documentation_url, parsed.errors),
            Err(_) => (body.trim().to_string(), None, Vec::new()),
        };

        Self {
            method,
            url,
            response,
            message,
            documentation_url,
            errors,
        }
    }

    /// HTTP status code
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.response.status.as_u16()
    }

    /// HTTP status
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.response.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.method, self.url, self.response.status)?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        for detail in &self.errors {
            if let Some(msg) = detail.message.as_deref().or(detail.code.as_deref()) {
                write!(f, " [{msg}]")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
