//! Test support: a transport that replays scripted responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::auth::Session;
use crate::error::Error;
use crate::http::{ApiRequest, RawResponse, Transport};
use crate::types::BaseUrl;

/// Transport that replays queued responses and records requests.
#[derive(Debug)]
pub(crate) struct ScriptedTransport {
    base_url: BaseUrl,
    responses: Mutex<VecDeque<Result<RawResponse, Error>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            base_url: BaseUrl::new("https://api.signinghub.test").unwrap(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.push(status, headers, serde_json::to_vec(&body).unwrap());
    }

    pub(crate) fn push(&self, status: u16, headers: HeaderMap, body: Vec<u8>) {
        let response =
            RawResponse::new(StatusCode::from_u16(status).unwrap(), headers, Bytes::from(body));
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn push_error(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

pub(crate) fn session(transport: &Arc<ScriptedTransport>) -> Session {
    Session::with_transport(transport.clone())
}
