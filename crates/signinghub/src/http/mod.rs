//! HTTP plumbing: requests, responses, the transport boundary and the
//! response dispatcher applied after every API call.

mod client;
mod dispatch;
mod request;
mod response;

pub use client::{HttpTransport, Transport};
pub use dispatch::{ContentKind, dispatch};
pub use request::ApiRequest;
pub use response::{ApiResponse, RawResponse};
