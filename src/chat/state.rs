//! Chat window state machine.
//!
//! A submit is split in two halves. [`ChatState::begin_submit`] runs inside
//! the submit event handler: it validates the draft, appends the user message
//! and raises the loading gate before control returns to the event loop.
//! [`ChatState::finish`] runs once the backend answers and always lowers the
//! gate again, whatever the outcome.

use tracing::debug;

use super::backend::{BackendError, ChatRequest};
use super::message::Message;
use crate::theme::Theme;

/// Prefix of the notice appended when an exchange fails.
pub const FAILURE_PREFIX: &str = "Sorry, I couldn't reach the assistant";

/// Ticket for an in-flight exchange.
///
/// Only [`ChatState::begin_submit`] creates one and [`ChatState::finish`]
/// consumes it, so a reply can be applied at most once.
#[derive(Debug)]
pub struct PendingReply {
    request: ChatRequest,
}

impl PendingReply {
    /// The request to hand to the messaging backend.
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// State owned by one chat window instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    messages: Vec<Message>,
    draft: String,
    is_loading: bool,
    theme: Theme,
}

impl ChatState {
    /// Empty conversation, light theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were appended.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current composer text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether an exchange is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Active color theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Replace the composer text.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.draft.trim().is_empty()
    }

    /// Flip between the light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Accept the current draft.
    ///
    /// Returns `None` without touching the conversation when an exchange is
    /// already in flight or the draft is blank.
    pub fn begin_submit(&mut self) -> Option<PendingReply> {
        if self.is_loading {
            debug!(name: "chat.submit.ignored", reason = "loading", "Submit ignored");
            return None;
        }
        let text = self.draft.trim();
        if text.is_empty() {
            debug!(name: "chat.submit.ignored", reason = "empty", "Submit ignored");
            return None;
        }

        let request = ChatRequest {
            draft_text: text.to_owned(),
            conversation_context: self
                .messages
                .iter()
                .filter(|message| !message.is_error)
                .cloned()
                .collect(),
        };
        self.messages.push(Message::user(request.draft_text.clone()));
        self.is_loading = true;

        Some(PendingReply { request })
    }

    /// Apply the outcome of an exchange.
    ///
    /// A reply is appended as a bot message and clears the draft unless the
    /// user has edited it since submitting. A failure appends a notice and
    /// keeps the draft so it can be resent.
    pub fn finish(&mut self, pending: PendingReply, outcome: Result<Message, BackendError>) {
        match outcome {
            Ok(reply) => {
                if self.draft.trim() == pending.request.draft_text {
                    self.draft.clear();
                }
                self.messages.push(reply);
            }
            Err(err) => {
                self.messages
                    .push(Message::failure(format!("{FAILURE_PREFIX}: {err}")));
            }
        }
        self.is_loading = false;
    }
}
