//! Transport boundary and its reqwest implementation.

use async_trait::async_trait;
use tracing::{debug, instrument, trace};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::BaseUrl;

use super::request::ApiRequest;
use super::response::RawResponse;

/// Executes requests relative to a base URL.
///
/// The session only needs this one primitive; tests substitute their own.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// The base URL request paths are resolved against.
    fn base_url(&self) -> &BaseUrl;

    /// Perform the request and read the whole response.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error>;
}

/// HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpTransport {
    /// Create a transport for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: BaseUrl, config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    #[instrument(skip(self, request), fields(base_url = %self.base_url))]
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let (method, path, headers, body) = request.into_parts();
        let url = self.base_url.endpoint(&path);
        debug!(%method, %url, "sending request");

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        trace!(%status, len = body.len(), "response received");

        Ok(RawResponse::new(status, headers, body))
    }
}
