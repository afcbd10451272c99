//! Message records shown in the chat window.

use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    /// The person typing into the composer.
    User,
    /// The assistant on the other end of the messaging backend.
    Bot,
}

/// A single chat message.
///
/// Messages have no identity beyond their position in the conversation and
/// are never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Who wrote the message.
    pub author: Author,
    /// Markdown-formatted body.
    pub text: String,
    /// Set on synthetic notices that report a failed exchange.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Message {
    /// Create a user-authored message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
            is_error: false,
        }
    }

    /// Create a bot-authored message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            author: Author::Bot,
            text: text.into(),
            is_error: false,
        }
    }

    /// Create a bot-authored notice describing a failure.
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::bot(text)
        }
    }

    /// Whether the message was written by the bot.
    pub fn is_bot(&self) -> bool {
        self.author == Author::Bot
    }
}
