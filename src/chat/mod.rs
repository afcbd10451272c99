//! Headless chat interaction model.
//!
//! Everything here is independent of the DOM: the message log, the composer
//! draft, the loading gate and the messaging backend seam. The Leptos views in
//! [`crate::ui`] wrap [`ChatState`] in a signal and drive it from events.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut state = ChatState::new();
//! state.set_draft("How do I run the tests?");
//!
//! if let Some(pending) = state.begin_submit() {
//!     let outcome = exchange(&backend, &pending).await;
//!     state.finish(pending, outcome);
//! }
//! ```

mod backend;
mod http;
mod message;
mod state;

pub use backend::{BackendError, ChatReply, ChatRequest, MessagingBackend, exchange};
pub use http::{HttpBackend, RagBackend};
pub use message::{Author, Message};
pub use state::{ChatState, FAILURE_PREFIX, PendingReply};
