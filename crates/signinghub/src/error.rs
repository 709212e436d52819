//! Error types for the signinghub library.
//!
//! Failures are split into transport errors (the call never produced a
//! response), API errors built from an HTTP response, and local errors
//! (invalid input, unexpected response shapes).
//!
//! Building an error from a response never fails: bodies that are not JSON
//! are kept as text, bounded by [`MAX_ERROR_BODY_CHARS`].

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::http::RawResponse;

/// Maximum number of characters of a response body kept on an error.
pub const MAX_ERROR_BODY_CHARS: usize = 1024;

/// Prefix of the vendor headers collected on authentication errors.
pub const VENDOR_HEADER_PREFIX: &str = "x-";

/// The unified error type for signinghub operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with an error status other than 401.
    #[error("API error: {0}")]
    Api(ApiError),

    /// The API answered 401; the caller must authenticate again.
    #[error("unauthenticated: {0}")]
    Unauthenticated(ApiError),

    /// An authentication call was rejected.
    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthenticationError),

    /// A successful response could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// The response does not have the shape the caller asked for.
    #[error("unexpected response: expected {expected}, got {actual}")]
    UnexpectedResponse {
        expected: &'static str,
        actual: String,
    },

    /// `refresh` was called while no refresh token is held.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// Input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// HTTP status of the response this error was built from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) | Error::Unauthenticated(err) => Some(err.status),
            Error::Authentication(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns true when the caller should authenticate again.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Error::Unauthenticated(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The HTTP client could not be built.
    #[error("HTTP client setup failed: {message}")]
    Builder { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            TransportError::Timeout { message }
        } else if err.is_connect() {
            TransportError::Connection { message }
        } else if err.is_builder() {
            TransportError::Builder { message }
        } else {
            TransportError::Http { message }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A response body captured for diagnostics.
///
/// The text is cut at [`MAX_ERROR_BODY_CHARS`] characters when the body is
/// longer; [`ErrorBody::is_truncated`] tells whether that happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    text: String,
    truncated: bool,
}

impl ErrorBody {
    /// Capture a body with the default limit.
    pub fn capture(body: &[u8]) -> Self {
        Self::capture_with_limit(body, MAX_ERROR_BODY_CHARS)
    }

    /// Capture a body, keeping at most `limit` characters.
    pub fn capture_with_limit(body: &[u8], limit: usize) -> Self {
        let text = String::from_utf8_lossy(body);
        match text.char_indices().nth(limit) {
            Some((cut, _)) => Self {
                text: text[..cut].to_string(),
                truncated: true,
            },
            None => Self {
                text: text.into_owned(),
                truncated: false,
            },
        }
    }

    /// The captured text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the original body was longer than the kept text.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Whether the response had no body at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.truncated {
            f.write_str("... (truncated)")?;
        }
        Ok(())
    }
}

/// An error response from the API.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// The server's `Message`, or the raw text when the body is not JSON.
    pub description: Option<String>,
    /// The bounded response body.
    pub body: ErrorBody,
}

impl ApiError {
    /// Build an error from a response. Never fails.
    pub fn from_response(response: &RawResponse) -> Self {
        let body = ErrorBody::capture(response.body());
        let json = serde_json::from_slice::<Value>(response.body()).ok();
        let description = describe(json.as_ref(), &body);

        Self {
            status: response.status().as_u16(),
            description,
            body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref description) = self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// A rejected authentication call.
///
/// Carries the OAuth-style `error` code and `error_description` from the
/// body, plus every `x-` response header for diagnosis.
#[derive(Debug, Clone)]
pub struct AuthenticationError {
    /// HTTP status code.
    pub status: u16,
    /// OAuth error code, e.g. `invalid_grant`.
    pub error: Option<String>,
    /// OAuth error description.
    pub error_description: Option<String>,
    /// The server's `Message`, or the raw text when the body is not JSON.
    pub description: Option<String>,
    /// Vendor response headers, keyed by lowercase name.
    pub vendor_headers: BTreeMap<String, String>,
    /// The bounded response body.
    pub body: ErrorBody,
}

impl AuthenticationError {
    /// Build an error from a response. Never fails.
    pub fn from_response(response: &RawResponse) -> Self {
        let body = ErrorBody::capture(response.body());
        let json = serde_json::from_slice::<Value>(response.body()).ok();
        let field = |name: &str| {
            json.as_ref()
                .and_then(|v| v.get(name))
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        let vendor_headers = response
            .headers()
            .iter()
            .filter(|(name, _)| name.as_str().starts_with(VENDOR_HEADER_PREFIX))
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        Self {
            status: response.status().as_u16(),
            error: field("error"),
            error_description: field("error_description"),
            description: describe(json.as_ref(), &body),
            vendor_headers,
            body,
        }
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(description) = self
            .error_description
            .as_deref()
            .or(self.description.as_deref())
        {
            write!(f, ": {}", description)?;
        }
        if !self.vendor_headers.is_empty() {
            let headers: Vec<String> = self
                .vendor_headers
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            write!(f, " ({})", headers.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for AuthenticationError {}

/// Description of an error body: the `Message` field of a JSON body, or the
/// raw text when the body is not JSON.
fn describe(json: Option<&Value>, body: &ErrorBody) -> Option<String> {
    match json {
        Some(value) => ["Message", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(str::to_owned),
        None if body.is_empty() => None,
        None => Some(body.text().to_string()),
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A value cannot be sent as an HTTP header.
    #[error("invalid value for header '{name}': {reason}")]
    Header { name: String, reason: String },

    /// A request payload could not be encoded or has the wrong shape.
    #[error("invalid payload: {reason}")]
    Payload { reason: String },
}
