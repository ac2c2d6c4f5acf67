//! HTTP transport for the chat-completions endpoint
//!
//! [`Transport`] is the only network seam of the client. [`HttpTransport`]
//! is the reqwest-backed implementation; tests substitute their own.

use crate::openai::ApiKey;
use crate::LlmError;
use async_trait::async_trait;
use reqwest::header;
use std::time::Duration;
use tracing::warn;

/// Status and body of an HTTP response, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

/// Sends a JSON body with bearer authorization and returns the raw reply
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url`
    ///
    /// Implementations return [`LlmError::Transport`] when no HTTP response
    /// was obtained. Any status code, including errors, is returned as a
    /// [`RawResponse`].
    async fn post_json(
        &self,
        url: &str,
        api_key: &ApiKey,
        body: String,
    ) -> Result<RawResponse, LlmError>;
}

/// reqwest-backed transport with a bounded request timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests fail after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: &ApiKey,
        body: String,
    ) -> Result<RawResponse, LlmError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key.expose())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "Chat completion request failed");
                LlmError::Transport(describe(&e))
            })?;

        let status = response.status().as_u16();
        // Reading the body consumes the response and releases the connection
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, status, "Failed to read chat completion response");
            LlmError::Transport(describe(&e))
        })?;

        Ok(RawResponse { status, body })
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("request failed: {}", e)
    }
}
