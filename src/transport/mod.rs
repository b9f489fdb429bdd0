//! Transport abstraction for the driver.
//!
//! A transport performs exactly one HTTP exchange per call and hands back
//! the raw body bytes; everything above it (decoding, pagination, session
//! threading) is transport-agnostic. The seam exists so the whole
//! pagination engine can be exercised against scripted responses.

mod http;
mod mock;

pub use http::ReqwestTransport;
pub use mock::{MockTransport, RecordedRequest};

use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Trait defining a single request/response HTTP exchange.
///
/// Implementations must be thread-safe (Send + Sync) to support async
/// operations. HTTP status is not interpreted here: the engine reports
/// query failures inside the payload, so a completed non-2xx exchange
/// still returns its body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a POST with a JSON body, returning the raw response body.
    async fn post(&self, url: &str, headers: &HeaderMap, body: Vec<u8>) -> Result<Vec<u8>>;

    /// Performs a GET, returning the raw response body.
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<Vec<u8>>;
}
