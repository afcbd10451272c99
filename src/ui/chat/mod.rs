//! Chat-specific UI components.
//!
//! [`ChatWindow`] owns the state; the other components are driven purely by
//! the signals and callbacks it passes down.

mod header;
mod input_area;
mod message;
mod message_list;
mod window;

pub use header::ChatHeader;
pub use input_area::ChatInputArea;
pub use message::ChatMessage;
pub use message_list::{ChatMessageList, TypingIndicator};
pub use window::{ChatWindow, DEFAULT_TITLE};
