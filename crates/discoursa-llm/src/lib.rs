//! Discoursa LLM Exchange Layer
//!
//! Builds chat-completion requests and exchanges them with an
//! OpenAI-compatible endpoint.
//!
//! # Architecture
//!
//! ```text
//! prompt + ModelParams → request → OpenAiClient → Transport → reply text
//! ```
//!
//! Every failure is a typed [`LlmError`]; an empty `Ok` string always means
//! the model replied with empty content.
//!
//! # Providers
//!
//! - `ConfiguredProvider`: `OpenAiClient` bundled with a key and parameters
//! - `MockProvider`: Deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use discoursa_llm::{ChatProvider, MockProvider};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.complete("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod openai;
pub mod request;
pub mod transport;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use config::LlmConfig;
pub use openai::{extract_reply, ApiKey, ConfiguredProvider, OpenAiClient};
pub use request::{build_request, ChatMessage, ChatRequest, ModelParams};
pub use transport::{HttpTransport, RawResponse, Transport};

/// Errors that can occur during an LLM exchange
#[derive(Error, Debug)]
pub enum LlmError {
    /// No HTTP response was obtained (connection, TLS, DNS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a status other than 200
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A 200 response whose body does not carry a reply
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Request parameters were rejected before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Client or credential configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Something that turns a prompt into reply text
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one exchange for `prompt`
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    ApiError(u16),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use discoursa_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2", 429);
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure an API error with `status` for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, status: u16) {
        lock(&self.responses).insert(prompt.into(), MockReply::ApiError(status));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        lock(&self.prompts).push(prompt.to_string());

        match lock(&self.responses).get(prompt) {
            Some(MockReply::Text(response)) => Ok(response.clone()),
            Some(MockReply::ApiError(status)) => Err(LlmError::Api {
                status: *status,
                body: "Mock error".to_string(),
            }),
            None => Ok(self.default_response.clone()),
        }
    }
}

// A panic while holding a mock lock leaves plain data behind; keep using it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete("any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete("hello").await.unwrap(), "world");
        assert_eq!(provider.complete("foo").await.unwrap(), "bar");
        assert_eq!(
            provider.complete("unknown").await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_records_prompts() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.complete("prompt1").await.unwrap();
        provider.complete("prompt2").await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["prompt1", "prompt2"]);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", 401);

        match provider.complete("bad prompt").await {
            Err(LlmError::Api { status, .. }) => assert_eq!(status, 401),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete("test").await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = LlmError::Api {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 401): unauthorized");
        assert_eq!(
            LlmError::Transport("connection refused".to_string()).to_string(),
            "Transport error: connection refused"
        );
    }
}
