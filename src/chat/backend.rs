//! Messaging backend seam.
//!
//! The chat window never talks to a transport directly. It hands a
//! [`ChatRequest`] to whatever [`MessagingBackend`] it was given and turns the
//! outcome into the next message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::message::Message;
use super::state::PendingReply;

/// Request sent to a messaging backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The submitted draft, trimmed.
    pub draft_text: String,
    /// Prior messages, oldest first. Failure notices are left out.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversation_context: Vec<Message>,
}

/// Successful backend response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Markdown-formatted reply text.
    pub text: String,
}

/// Errors raised while exchanging a message with a backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Body or detail returned by the backend.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("malformed reply: {0}")]
    Decode(String),

    /// The backend answered with no text.
    #[error("backend returned an empty reply")]
    EmptyReply,

    /// No backend is configured.
    #[error("no messaging backend is configured")]
    Unavailable,

    /// The configured endpoint is not a valid URL.
    #[error("invalid backend endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// A capability that answers chat drafts.
///
/// Futures are `Send` on native targets so the host server can hold a backend
/// in shared state. In the browser they run on the single UI thread.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MessagingBackend: Send + Sync {
    /// Send a draft with its conversation context and wait for the reply.
    async fn send(&self, request: &ChatRequest) -> Result<Message, BackendError>;
}

/// Dispatch a pending reply to `backend`.
///
/// Replies without any text count as failures, so the window never appends an
/// empty bubble.
pub async fn exchange(
    backend: &dyn MessagingBackend,
    pending: &PendingReply,
) -> Result<Message, BackendError> {
    let request = pending.request();
    info!(
        name: "chat.exchange.started",
        draft_len = request.draft_text.len(),
        context_len = request.conversation_context.len(),
        "Dispatching draft to messaging backend"
    );

    let outcome = match backend.send(request).await {
        Ok(reply) if reply.text.trim().is_empty() => Err(BackendError::EmptyReply),
        Ok(reply) => Ok(Message::bot(reply.text)),
        Err(err) => Err(err),
    };

    match &outcome {
        Ok(reply) => info!(
            name: "chat.exchange.completed",
            reply_len = reply.text.len(),
            "Messaging backend replied"
        ),
        Err(err) => warn!(
            name: "chat.exchange.failed",
            error = %err,
            "Messaging backend failed"
        ),
    }

    outcome
}
