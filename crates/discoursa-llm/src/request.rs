//! Chat-completion request payloads

use crate::LlmError;
use serde::{Deserialize, Serialize};

/// Model identifier and sampling temperature for one exchange
///
/// Validated on construction, so a `ModelParams` value always produces a
/// well-formed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    model: String,
    temperature: f64,
}

impl ModelParams {
    /// Recommended upper bound for sampling temperature
    pub const MAX_TEMPERATURE: f64 = 2.0;

    /// Create validated model parameters
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::InvalidRequest`] if the model is empty or the
    /// temperature is not a finite number in `0.0..=2.0`.
    pub fn new(model: impl Into<String>, temperature: f64) -> Result<Self, LlmError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(LlmError::InvalidRequest("model must not be empty".to_string()));
        }
        if !temperature.is_finite() {
            return Err(LlmError::InvalidRequest(format!(
                "temperature must be finite, got {}",
                temperature
            )));
        }
        if !(0.0..=Self::MAX_TEMPERATURE).contains(&temperature) {
            return Err(LlmError::InvalidRequest(format!(
                "temperature must be between 0.0 and {}, got {}",
                Self::MAX_TEMPERATURE,
                temperature
            )));
        }
        Ok(Self { model, temperature })
    }

    /// Model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sampling temperature
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model to use
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

/// Build a single-turn request carrying `prompt` as the only user message
pub fn build_request(prompt: &str, params: &ModelParams) -> ChatRequest {
    ChatRequest {
        model: params.model.clone(),
        temperature: params.temperature,
        messages: vec![ChatMessage::user(prompt)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        assert!(ModelParams::new("gpt-5-nano", 1.0).is_ok());
        assert!(ModelParams::new("gpt-5-nano", 0.0).is_ok());
        assert!(ModelParams::new("gpt-5-nano", 2.0).is_ok());

        assert!(matches!(
            ModelParams::new("", 1.0),
            Err(LlmError::InvalidRequest(_))
        ));
        assert!(matches!(
            ModelParams::new("   ", 1.0),
            Err(LlmError::InvalidRequest(_))
        ));
        assert!(ModelParams::new("m", f64::NAN).is_err());
        assert!(ModelParams::new("m", f64::INFINITY).is_err());
        assert!(ModelParams::new("m", -0.1).is_err());
        assert!(ModelParams::new("m", 2.5).is_err());
    }

    #[test]
    fn test_build_request_has_single_user_message() {
        let params = ModelParams::new("gpt-4o-mini", 0.7).unwrap();
        let request = build_request("Hello, how are you?", &params);

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.messages, vec![ChatMessage::user("Hello, how are you?")]);
    }

    #[test]
    fn test_request_wire_shape() {
        let params = ModelParams::new("gpt-5-nano", 1.0).unwrap();
        let value = serde_json::to_value(build_request("hi", &params)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-5-nano",
                "temperature": 1.0,
                "messages": [{"role": "user", "content": "hi"}]
            })
        );
    }

    #[test]
    fn test_request_decodes_back() {
        let params = ModelParams::new("m", 0.25).unwrap();
        let request = build_request("prompt with \"quotes\" and\nnewlines", &params);

        let json = serde_json::to_string(&request).unwrap();
        let decoded: ChatRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, request);
        assert_eq!(decoded.messages.len(), 1);
        assert_eq!(decoded.messages[0].role, "user");
    }
}
