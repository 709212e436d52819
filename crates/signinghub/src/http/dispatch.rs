//! Response dispatcher.
//!
//! Every API call ends here: the status and content type of the captured
//! response decide whether the caller gets decoded JSON, raw bytes, the
//! response itself, or a typed error.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde_json::Value;
use tracing::trace;

use crate::error::{ApiError, Error};

use super::response::{ApiResponse, RawResponse};

/// Body kinds the dispatcher distinguishes on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    OctetStream,
    Other,
}

impl ContentKind {
    /// Classify by the mime essence of `Content-Type`; parameters such as
    /// `charset` are ignored.
    pub fn of(headers: &HeaderMap) -> Self {
        let essence = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase());

        match essence.as_deref() {
            Some("application/json") => ContentKind::Json,
            Some("application/octet-stream") => ContentKind::OctetStream,
            _ => ContentKind::Other,
        }
    }
}

/// Classify a response.
///
/// 200 and 201 are successes; 401 becomes [`Error::Unauthenticated`]; every
/// other status becomes [`Error::Api`].
pub fn dispatch(response: RawResponse) -> Result<ApiResponse, Error> {
    let status = response.status();

    if status == StatusCode::OK || status == StatusCode::CREATED {
        let kind = ContentKind::of(response.headers());
        trace!(%status, ?kind, "successful response");
        return match kind {
            ContentKind::Json => decode_json(&response).map(ApiResponse::Json),
            ContentKind::OctetStream => Ok(ApiResponse::Bytes(response.into_body())),
            ContentKind::Other => Ok(ApiResponse::Raw(response)),
        };
    }

    trace!(%status, "error response");
    let error = ApiError::from_response(&response);
    if status == StatusCode::UNAUTHORIZED {
        Err(Error::Unauthenticated(error))
    } else {
        Err(Error::Api(error))
    }
}

fn decode_json(response: &RawResponse) -> Result<Value, Error> {
    if response.body().iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    response.json().map_err(|e| Error::Decode {
        message: e.to_string(),
    })
}
