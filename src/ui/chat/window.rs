//! Chat window: state owner and layout.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ChatHeader, ChatInputArea, ChatMessageList};
use crate::chat::{ChatState, Message, MessagingBackend, PendingReply, exchange};
use crate::ui::document::use_document_theme;
use crate::ui::keyboard::use_focus_shortcut;

/// Default window title.
pub const DEFAULT_TITLE: &str = "AI Chatbot";

/// Complete chat window.
///
/// Owns the [`ChatState`] for its lifetime and wires it to:
/// - Header with title and theme toggle
/// - Scrollable message list
/// - Composer with the `/` focus shortcut
///
/// A submit is accepted synchronously inside the event handler, which raises
/// the loading gate before any re-render. The backend call is spawned on the
/// local executor and applied to the state when it settles.
///
/// # Example
///
/// ```rust,ignore
/// let backend: Arc<dyn MessagingBackend> = Arc::new(HttpBackend::new(endpoint)?);
/// mount_to_body(move || view! { <ChatWindow backend=backend title="AI Chatbot" /> });
/// ```
#[component]
pub fn ChatWindow(
    /// Capability that answers drafts.
    backend: Arc<dyn MessagingBackend>,
    /// Title displayed in the header.
    #[prop(into, default = DEFAULT_TITLE.to_string())]
    title: String,
) -> impl IntoView {
    let state = RwSignal::new(ChatState::new());
    let messages = conversation(state);
    let draft = Memo::new(move |_| state.with(|s| s.draft().to_owned()));
    let is_loading = Memo::new(move |_| state.with(ChatState::is_loading));
    let theme = Memo::new(move |_| state.with(ChatState::theme));
    let input_ref = NodeRef::<html::Input>::new();

    use_document_theme(theme.into());
    use_focus_shortcut(input_ref);

    let on_input = Callback::new(move |text: String| state.update(|s| s.set_draft(text)));
    let on_toggle_theme = Callback::new(move |()| state.update(ChatState::toggle_theme));
    let on_submit = Callback::new(move |()| {
        if let Some(pending) = accept_submit(state) {
            spawn_local(deliver_reply(state, Arc::clone(&backend), pending));
        }
    });

    view! {
        <div class=move || format!(
            "flex justify-center items-center min-h-screen transition-colors duration-300 {}",
            theme.get().page()
        )>
            <div class=move || format!(
                "chat-window w-full max-w-2xl h-[600px] bg-white dark:bg-gray-800 rounded-lg \
                 shadow-xl overflow-hidden flex flex-col transition-colors duration-300 {}",
                theme.get().scope()
            )>
                <ChatHeader title=title theme=theme on_toggle_theme=on_toggle_theme />

                <ChatMessageList messages=messages is_loading=is_loading theme=theme />

                <ChatInputArea
                    input_ref=input_ref
                    draft=draft
                    is_loading=is_loading
                    theme=theme
                    on_input=on_input
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}

/// Number of messages in the log.
fn message_count(state: RwSignal<ChatState>) -> Memo<usize> {
    Memo::new(move |_| state.with(|s| s.messages().len()))
}

/// The conversation as a signal that only changes when the log grows.
///
/// The log is append-only, so its length identifies it; draft edits and theme
/// flips leave the copy alone.
fn conversation(state: RwSignal<ChatState>) -> Signal<Vec<Message>> {
    let count = message_count(state);
    Signal::derive(move || {
        count.track();
        state.with_untracked(|s| s.messages().to_vec())
    })
}

/// First half of a submit: accept the draft and raise the loading gate.
fn accept_submit(state: RwSignal<ChatState>) -> Option<PendingReply> {
    state.try_update(ChatState::begin_submit).flatten()
}

/// Second half of a submit: run the exchange and apply its outcome.
async fn deliver_reply(
    state: RwSignal<ChatState>,
    backend: Arc<dyn MessagingBackend>,
    pending: PendingReply,
) {
    let outcome = exchange(backend.as_ref(), &pending).await;
    if let Err(err) = &outcome {
        leptos::logging::warn!("chat exchange failed: {err}");
    }
    state.update(move |s| s.finish(pending, outcome));
}
