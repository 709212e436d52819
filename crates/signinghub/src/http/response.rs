//! Captured responses and the values the dispatcher hands back.

use std::borrow::Cow;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The raw `Content-Type` header, if present and readable.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE)?.to_str().ok()
    }
}

/// The outcome of a successful API call.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// A decoded `application/json` body.
    Json(Value),
    /// An `application/octet-stream` body.
    Bytes(Bytes),
    /// Any other content type; the response is passed through untouched.
    Raw(RawResponse),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Take the decoded JSON value.
    pub fn into_json(self) -> Result<Value, Error> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            other => Err(other.unexpected("a JSON body")),
        }
    }

    /// Deserialize the JSON body into `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, Error> {
        let value = self.into_json()?;
        serde_json::from_value(value).map_err(|e| Error::Decode {
            message: e.to_string(),
        })
    }

    /// Take the body bytes of a binary or passed-through response.
    pub fn into_bytes(self) -> Result<Bytes, Error> {
        match self {
            ApiResponse::Bytes(bytes) => Ok(bytes),
            ApiResponse::Raw(raw) => Ok(raw.into_body()),
            other => Err(other.unexpected("a binary body")),
        }
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        let actual = match self {
            ApiResponse::Json(_) => "a JSON body".to_string(),
            ApiResponse::Bytes(_) => "a binary body".to_string(),
            ApiResponse::Raw(raw) => match raw.content_type() {
                Some(content_type) => format!("content type '{}'", content_type),
                None => "a response without content type".to_string(),
            },
        };
        Error::UnexpectedResponse { expected, actual }
    }
}
