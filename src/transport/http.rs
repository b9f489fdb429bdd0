//! HTTP transport backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

use crate::config::ConnectionConfig;
use crate::error::{FerryError, Result};
use crate::transport::Transport;

/// Transport that talks to a real query engine over HTTP.
///
/// The underlying client pools connections, so one instance per
/// connection is enough for a whole pagination chain.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the transport from connection settings.
    ///
    /// Certificate verification stays on unless the configuration
    /// explicitly opts out.
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if config.accept_invalid_certs {
            warn!("TLS certificate verification disabled by configuration");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| FerryError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn exchange(&self, url: &str, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FerryError::transport(format!("Request to {} timed out", url))
            } else if e.is_connect() {
                FerryError::transport(format!("Failed to connect to {}: {}", url, e))
            } else {
                FerryError::transport(format!("Request to {} failed: {}", url, e))
            }
        })?;

        // Query failures arrive inside the body, not as HTTP errors, so a
        // non-2xx status is only worth noting before the decode proceeds.
        let status = response.status();
        if !status.is_success() {
            debug!("Engine returned HTTP {} for {}", status, url);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FerryError::transport(format!("Failed to read response body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, url: &str, headers: &HeaderMap, body: Vec<u8>) -> Result<Vec<u8>> {
        let request = self.client.post(url).headers(headers.clone()).body(body);
        self.exchange(url, request).await
    }

    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<Vec<u8>> {
        let request = self.client.get(url).headers(headers.clone());
        self.exchange(url, request).await
    }
}
