//! Chat passthrough to an OpenAI-compatible completions API.
//!
//! The client is only constructed when an API key is configured; callers
//! without one serve [`OFFLINE_REPLY`] instead of making a request.

use crate::error::AssistError;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Reply served when no API key is configured.
pub const OFFLINE_REPLY: &str =
    "AI is offline. Add OPENAI_API_KEY in server/.env to enable live responses.";

/// Reply served when the provider answers without usable content.
pub const FALLBACK_REPLY: &str = "Sorry, I could not generate a reply.";

/// System prompt framing every chat turn.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful hotel concierge. Answer concisely and suggest best rooms.";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// API base used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Sampling temperature for concierge replies.
pub const CHAT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: ChatRole,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

/// Completion response body. Provider error bodies are valid JSON with no
/// `choices` entry, so the field defaults to empty rather than failing to
/// decode.
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

fn first_reply(completion: ChatCompletion) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Creates a client for the given key, model, and API base.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn build_request(&self, message: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: message.to_string(),
                },
            ],
            temperature: CHAT_TEMPERATURE,
        }
    }

    /// Sends one user message and returns the assistant reply.
    ///
    /// A provider body without usable content (error envelope, empty
    /// choices, blank message) yields [`FALLBACK_REPLY`] rather than an
    /// error; only transport and decode failures are reported.
    #[instrument(skip(self, message), fields(model = %self.model))]
    pub async fn reply(&self, message: &str) -> Result<String, Report<AssistError>> {
        let request = self.build_request(message);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistError::RequestFailed {
                reason: e.to_string(),
            })?;

        let completion: ChatCompletion =
            response
                .json()
                .await
                .map_err(|e| AssistError::ResponseParseFailed {
                    reason: e.to_string(),
                })?;

        let reply = first_reply(completion);
        debug!(reply_chars = reply.len(), "assistant reply received");

        Ok(reply)
    }
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_shape() {
        let client = ChatClient::new("sk-test", DEFAULT_MODEL, DEFAULT_BASE_URL);
        let request = client.build_request("Which room fits a family of four?");

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Which room fits a family of four?");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ChatClient::new("sk-test", DEFAULT_MODEL, "https://api.openai.com/v1/");
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn completion_reply_is_trimmed() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  The Ocean Villa suits you.  "}}
            ]
        }"#;
        let completion: ChatCompletion = serde_json::from_str(body).expect("decode");
        assert_eq!(first_reply(completion), "The Ocean Villa suits you.");
    }

    #[test]
    fn error_body_without_choices_falls_back() {
        let body = r#"{"error": {"message": "invalid api key", "type": "invalid_request_error"}}"#;
        let completion: ChatCompletion = serde_json::from_str(body).expect("decode");
        assert_eq!(first_reply(completion), FALLBACK_REPLY);
    }

    #[test]
    fn blank_content_falls_back() {
        let body = r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "   "}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).expect("decode");
        assert_eq!(first_reply(completion), FALLBACK_REPLY);
    }

    #[test]
    fn missing_content_falls_back() {
        let body = r#"{"choices": [{"index": 0, "message": {"role": "assistant"}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).expect("decode");
        assert_eq!(first_reply(completion), FALLBACK_REPLY);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = ChatClient::new("sk-secret", DEFAULT_MODEL, DEFAULT_BASE_URL);
        let debug = format!("{client:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("gpt-4o-mini"));
    }
}
