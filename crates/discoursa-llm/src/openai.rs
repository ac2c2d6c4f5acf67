//! OpenAI chat-completions client
//!
//! One exchange is a single POST to `{base_url}/chat/completions` followed by
//! extraction of `choices[0].message.content`. No retries are attempted.
//!
//! # Examples
//!
//! ```no_run
//! use discoursa_llm::{ApiKey, LlmConfig, OpenAiClient};
//!
//! # async fn example() -> Result<(), discoursa_llm::LlmError> {
//! let config = LlmConfig::default();
//! let client = OpenAiClient::new(&config)?;
//! let key = ApiKey::new("sk-...");
//!
//! let reply = client
//!     .send("Hello, how are you?", &key, &config.model_params()?)
//!     .await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

use crate::request::{build_request, ModelParams};
use crate::transport::{HttpTransport, Transport};
use crate::{ChatProvider, LlmConfig, LlmError};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

/// Default OpenAI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Path of the chat-completions endpoint relative to the base URL
pub const COMPLETIONS_PATH: &str = "/chat/completions";

/// API credential sent as a bearer token
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from an environment variable
    pub fn from_env(var: &str) -> Result<Self, LlmError> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self(key)),
            _ => Err(LlmError::Config(format!("{} not set", var))),
        }
    }

    /// The raw secret
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Raw chat response (only the consumed fields)
#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extract `choices[0].message.content` from a successful response body
///
/// # Errors
///
/// Returns [`LlmError::Protocol`] if the body is not JSON, has no choices, or
/// the first choice carries no string content.
pub fn extract_reply(body: &str) -> Result<String, LlmError> {
    let raw: ChatResponseRaw = serde_json::from_str(body)
        .map_err(|e| LlmError::Protocol(format!("Failed to parse response: {}", e)))?;

    let choice = raw
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::Protocol("Response contained no choices".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| LlmError::Protocol("First choice has no message content".to_string()))
}

/// Chat-completions client
///
/// Holds no model state: model and temperature are passed to every
/// [`OpenAiClient::send`] call.
pub struct OpenAiClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl OpenAiClient<HttpTransport> {
    /// Create a client using the reqwest transport and the configured timeout
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        config.validate()?;
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(transport, config.base_url.clone()))
    }
}

impl<T: Transport> OpenAiClient<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}{}", self.base_url, COMPLETIONS_PATH)
    }

    /// Send `prompt` as a single user message and return the reply text
    ///
    /// # Errors
    ///
    /// - [`LlmError::Transport`]: no HTTP response (connection, TLS, DNS, timeout)
    /// - [`LlmError::Api`]: any status other than 200
    /// - [`LlmError::Protocol`]: 200 with a body that does not carry a reply
    pub async fn send(
        &self,
        prompt: &str,
        api_key: &ApiKey,
        params: &ModelParams,
    ) -> Result<String, LlmError> {
        let request = build_request(prompt, params);
        let body = serde_json::to_string(&request)
            .map_err(|e| LlmError::InvalidRequest(format!("Failed to serialize request: {}", e)))?;

        let url = self.completions_url();
        debug!(
            url = %url,
            model = params.model(),
            temperature = params.temperature(),
            prompt_len = prompt.len(),
            "Sending chat completion request"
        );

        let response = self.transport.post_json(&url, api_key, body).await?;

        if response.status != 200 {
            warn!(status = response.status, body = %response.body, "Chat completion API error");
            return Err(LlmError::Api {
                status: response.status,
                body: response.body,
            });
        }

        let reply = extract_reply(&response.body).inspect_err(|e| {
            warn!(error = %e, "Unusable chat completion response");
        })?;
        debug!(reply_len = reply.len(), "Received chat completion");
        Ok(reply)
    }
}

/// A client bundled with the credential and model parameters it sends with
pub struct ConfiguredProvider<T = HttpTransport> {
    client: OpenAiClient<T>,
    api_key: ApiKey,
    params: ModelParams,
}

impl<T: Transport> ConfiguredProvider<T> {
    /// Bundle a client with fixed credentials and parameters
    pub fn new(client: OpenAiClient<T>, api_key: ApiKey, params: ModelParams) -> Self {
        Self {
            client,
            api_key,
            params,
        }
    }

    /// Parameters used for every exchange
    pub fn params(&self) -> &ModelParams {
        &self.params
    }
}

#[async_trait]
impl<T: Transport> ChatProvider for ConfiguredProvider<T> {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.client.send(prompt, &self.api_key, &self.params).await
    }
}
