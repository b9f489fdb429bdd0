//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::{FerryError, Result};
use crate::transport::Transport;

/// One request captured by [`MockTransport`], for assertions on what the
/// driver actually sent.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    /// Decodes the captured body as JSON, if one was sent.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        let body = self.body.as_ref()?;
        serde_json::from_slice(body).ok()
    }
}

/// Transport that replays a scripted sequence of responses.
///
/// Each exchange consumes the next scripted entry in order, regardless of
/// method or URL; requesting past the end of the script is reported as a
/// transport failure so a test that over-fetches fails loudly. Clones
/// share the script and the request log, so a test can keep a handle for
/// assertions after moving the transport into a connection.
#[derive(Default, Clone)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Result<Vec<u8>>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response body to hand back on the next exchange.
    pub fn with_response(self, body: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(Ok(body.into()));
        }
        self
    }

    /// Queues a JSON response body.
    pub fn with_json(self, value: serde_json::Value) -> Self {
        self.with_response(value.to_string())
    }

    /// Queues a transport-level failure.
    pub fn with_failure(self, message: &str) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(Err(FerryError::transport(message)));
        }
        self
    }

    /// Returns every request seen so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn record(&self, request: RecordedRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }

    fn next_response(&self) -> Result<Vec<u8>> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| FerryError::internal("mock transport lock poisoned"))?;
        script
            .pop_front()
            .unwrap_or_else(|| Err(FerryError::transport("mock transport script exhausted")))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, url: &str, headers: &HeaderMap, body: Vec<u8>) -> Result<Vec<u8>> {
        self.record(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            headers: headers.clone(),
            body: Some(body),
        });
        self.next_response()
    }

    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<Vec<u8>> {
        self.record(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            headers: headers.clone(),
            body: None,
        });
        self.next_response()
    }
}
