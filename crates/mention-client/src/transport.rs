//! Authenticated HTTP transport.
//!
//! One request/response round trip per call: fixed headers, bounded
//! timeout, full-body read, then decoding into either a success payload or
//! the [`ApiError`] taxonomy.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::api_error::ApiError;
use crate::error::ClientError;

/// Seam between the domain client and the network.
///
/// Implementations must tolerate concurrent use without external locking.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw success body.
    ///
    /// The body, if present, is an already-serialized JSON value; status
    /// codes >= 400 come back as [`ClientError::Api`], network failures as
    /// [`ClientError::Transport`] or [`ClientError::Timeout`].
    async fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ClientError>;
}

/// Decode a success body into `T`.
///
/// An empty body yields the zero value; a malformed body is a
/// [`ClientError::Decode`], never an API-level error.
pub fn decode_body<T: DeserializeOwned + Default>(data: &[u8]) -> Result<T, ClientError> {
    if data.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(data).map_err(|e| ClientError::Decode(e.to_string()))
}

/// reqwest-backed [`Transport`] for the Mention API.
pub struct HttpTransport {
    base_url: String,
    api_version: String,
    access_token: String,
    user_agent: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        access_token: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            api_version: api_version.into(),
            access_token: access_token.into(),
            user_agent: user_agent.into(),
            timeout,
            client,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout.as_secs())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let body_text = body.map(|value| value.to_string());

        debug!(
            method,
            url = %url,
            accept_version = %self.api_version,
            user_agent = %self.user_agent,
            authorization = "Bearer [REDACTED]",
            body = body_text.as_deref().unwrap_or(""),
            "HTTP request"
        );

        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|_| ClientError::Transport(format!("invalid HTTP method: {method}")))?;

        let mut request = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept-Version", &self.api_version)
            .header("User-Agent", &self.user_agent)
            .header("Authorization", format!("Bearer {}", self.access_token));

        if let Some(text) = body_text {
            request = request.body(text);
        }

        let response = request.send().await.map_err(|e| {
            error!(url = %url, error = %e, "error executing request");
            self.map_send_error(e)
        })?;

        let status = response.status().as_u16();
        let headers: Vec<String> = response
            .headers()
            .iter()
            .map(|(name, value)| format!("{name}: {}", value.to_str().unwrap_or("<binary>")))
            .collect();

        let data = response.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "error reading response body");
            self.map_send_error(e)
        })?;

        debug!(
            status,
            headers = ?headers,
            body = %String::from_utf8_lossy(&data),
            "HTTP response"
        );

        if status >= 400 {
            let api_err = ApiError::from_body(status, &data);
            error!(status, error = %api_err, "API error");
            return Err(ClientError::Api(api_err));
        }

        Ok(data.to_vec())
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
