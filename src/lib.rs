//! Chat window
//!
//! A Leptos chat window (message list, composer, theme toggle) driven by an
//! injected messaging backend, plus the axum server that hosts it.
//!
//! # Architecture
//!
//! - **Interaction model**: DOM-free state machine with an append-only log and a loading gate
//! - **Backends**: `MessagingBackend` trait with reqwest implementations
//! - **UI**: Leptos components, mounted client-side from the wasm bundle
//! - **Server**: Axum host for the page shell, the bundle and the chat proxy
//!
//! # Modules
//!
//! - [`chat`]: Messages, state machine and backend seam
//! - [`markdown`]: Message body rendering
//! - [`theme`]: Light/dark flag and palette
//! - [`ui`]: Leptos components and DOM effects
//! - `config`, `server`: native host (not built for wasm)

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod chat;
pub mod markdown;
pub mod theme;
pub mod ui;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

/// Browser entry point: mount the chat window into `<body>`.
///
/// Replies are requested from the serving origin's `/api/chat` route. The
/// window title follows the page `<title>` rendered by the server.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::chat::{HttpBackend, MessagingBackend};
    use crate::ui::chat::{ChatWindow, DEFAULT_TITLE};

    let origin = window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let backend: Arc<dyn MessagingBackend> = match HttpBackend::new(format!("{origin}/api/chat")) {
        Ok(backend) => Arc::new(backend),
        Err(err) => {
            leptos::logging::error!("chat backend unavailable: {err}");
            return;
        }
    };

    let title = document().title();
    let title = if title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    };

    leptos::mount::mount_to_body(move || view! { <ChatWindow backend=backend title=title /> });
}
