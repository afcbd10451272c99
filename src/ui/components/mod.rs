//! Reusable UI primitives.
//!
//! Small Leptos components shared by the chat views. They take plain props
//! and signals and know nothing about chat state.
//!
//! # Components
//!
//! - [`Button`]: Round icon button with variants
//! - [`Input`]: Controlled text input
//! - [`Avatar`]: Round avatar badge
//! - [`ScrollArea`]: Scrollable container
//! - [`icons`]: SVG icon components

mod avatar;
mod button;
mod icons;
mod input;
mod scroll_area;

pub use avatar::Avatar;
pub use button::{Button, ButtonVariant};
pub use icons::*;
pub use input::Input;
pub use scroll_area::ScrollArea;
