//! Wire types for the chat endpoint and the emoji picker callback.
//!
//! DESIGN
//! ======
//! The endpoint answers with either `{"response": ...}` or `{"error": ...}`.
//! Both are decoded into one struct with optional fields and then folded into
//! a `Result` so callers never see the raw shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::config::FallbackMessages;

/// Failure of a single chat submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response (network unreachable, aborted).
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-2xx status without an application error in the body.
    #[error("chat request failed: {0}")]
    Status(u16),
    /// Body was not the expected JSON shape.
    #[error("malformed chat response: {0}")]
    Decode(String),
    /// The server reported an error in the `error` field.
    #[error("chat endpoint error: {0}")]
    Application(String),
    /// No browser environment to send from.
    #[error("chat transport not available outside the browser")]
    Unavailable,
}

impl ChatError {
    /// Fixed text shown to the user in place of a reply.
    ///
    /// Only the quota-exceeded application error is distinguished; the
    /// underlying error is never surfaced.
    pub fn fallback_text<'a>(&self, fallbacks: &'a FallbackMessages) -> &'a str {
        match self {
            Self::Application(msg) if *msg == fallbacks.quota_error => &fallbacks.busy,
            _ => &fallbacks.generic,
        }
    }
}

/// Decoded body of a chat endpoint reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatResponse {
    /// Fold the reply into the bot text or an application error.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Application`] when `error` is set, and
    /// [`ChatError::Decode`] when neither field is present.
    pub fn into_result(self) -> Result<String, ChatError> {
        match (self.error, self.response) {
            (Some(error), _) => Err(ChatError::Application(error)),
            (None, Some(response)) => Ok(response),
            (None, None) => Err(ChatError::Decode("missing `response` field".to_owned())),
        }
    }
}

/// One outgoing chat submission.
#[cfg(feature = "csr")]
#[derive(Debug)]
pub struct ChatRequest {
    pub message: String,
    pub file: Option<web_sys::File>,
}

/// Payload handed to `onEmojiSelect` by the emoji picker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EmojiSelection {
    pub native: String,
}
