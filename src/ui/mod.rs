//! UI components and browser effects.
//!
//! This module provides the Leptos components for the chat window and the
//! small DOM effects they rely on.
//!
//! # Structure
//!
//! - [`chat`]: Chat window and its parts
//! - [`components`]: Reusable UI primitives
//! - [`document`]: Theme flag on the document root
//! - [`keyboard`]: `/` focus shortcut
//! - [`scroll`]: Autoscroll for the message list

pub mod chat;
pub mod components;
pub mod document;
pub mod keyboard;
pub mod scroll;
