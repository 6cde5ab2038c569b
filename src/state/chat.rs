#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::FallbackMessages;
use crate::net::types::ChatError;

/// State for the chat widget: transcript, pending attachment and the
/// in-flight flag.
///
/// Held in an `RwSignal` provided via context. The thinking placeholder is
/// not a transcript entry; it is rendered after the last message while
/// `awaiting_reply` is set, so there is never more than one.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: Option<Attachment>,
    pub awaiting_reply: bool,
}

/// Who a transcript entry is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single rendered chat message. Never mutated once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub attachment: Option<Attachment>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, attachment: Option<Attachment>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: text.into(),
            attachment,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::Bot,
            text: text.into(),
            attachment: None,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// A locally selected file and the URL its preview is rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub preview_url: String,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Why a submit was turned into a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("nothing to send: empty text and no attachment")]
    Empty,
    #[error("a previous message is still awaiting a reply")]
    InFlight,
}

/// What the network call should carry for an accepted submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub attachment: Option<Attachment>,
}

impl ChatState {
    /// Start a submission from the raw compose text.
    ///
    /// On success the user message is already in the transcript, the pending
    /// attachment has moved onto it, and the thinking placeholder is shown.
    ///
    /// # Errors
    ///
    /// Rejects (leaving state untouched) when the trimmed text is empty and
    /// nothing is attached, or while a previous submission is in flight.
    pub fn begin_submit(&mut self, raw_text: &str) -> Result<Submission, SubmitRejection> {
        let text = raw_text.trim();
        if text.is_empty() && self.pending.is_none() {
            return Err(SubmitRejection::Empty);
        }
        if self.awaiting_reply {
            return Err(SubmitRejection::InFlight);
        }

        let attachment = self.pending.take();
        self.messages
            .push(ChatMessage::user(text, attachment.clone()));
        self.awaiting_reply = true;

        Ok(Submission { text: text.to_owned(), attachment })
    }

    /// Resolve the in-flight submission with the endpoint's outcome.
    ///
    /// Clears the placeholder first, then appends either the reply or the
    /// fallback text for `reply`'s error.
    pub fn finish_submit(&mut self, reply: Result<String, ChatError>, fallbacks: &FallbackMessages) {
        self.awaiting_reply = false;
        let text = match reply {
            Ok(text) => text,
            Err(err) => err.fallback_text(fallbacks).to_owned(),
        };
        self.messages.push(ChatMessage::bot(text));
    }

    /// Store `attachment` as pending, returning the one it replaces.
    pub fn select_attachment(&mut self, attachment: Attachment) -> Option<Attachment> {
        self.pending.replace(attachment)
    }

    /// Mirror the file input after a `change` event.
    ///
    /// An empty selection clears the pending attachment, so the transcript
    /// never shows a file the request will not carry. Returns the attachment
    /// that was dropped or replaced.
    pub fn sync_selection(&mut self, selected: Option<Attachment>) -> Option<Attachment> {
        match selected {
            Some(attachment) => self.select_attachment(attachment),
            None => self.cancel_attachment(),
        }
    }

    /// Drop the pending attachment, returning it so its preview can be released.
    pub fn cancel_attachment(&mut self) -> Option<Attachment> {
        self.pending.take()
    }

    /// Whether the thinking placeholder is visible.
    pub fn is_thinking(&self) -> bool {
        self.awaiting_reply
    }
}
