//! HTTP transport for the deployments endpoint.
//!
//! The pipeline only needs the response status code, so the transport
//! surface is one operation. Connection and DNS failures map to a fatal
//! transport error; there are no retries.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::{Error, Result};

/// Posts a JSON body and reports the response status code.
pub trait DeploymentTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<u16>;
}

/// reqwest-backed transport. `.json()` sets the Content-Type header.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl DeploymentTransport for HttpTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<u16> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(|e| Error::deploy_transport_failed(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
