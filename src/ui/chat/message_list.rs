//! Chat message list component.

use leptos::html;
use leptos::prelude::*;

use super::ChatMessage;
use crate::chat::Message;
use crate::theme::Theme;
use crate::ui::components::ScrollArea;
use crate::ui::scroll::use_autoscroll;

/// Scrollable list of messages.
///
/// Messages are append-only, so rows are keyed by position. The container is
/// pinned to the bottom after every change to the list or the typing state.
#[component]
pub fn ChatMessageList(
    /// Conversation so far.
    #[prop(into)]
    messages: Signal<Vec<Message>>,
    /// Whether a reply is pending.
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Active theme.
    #[prop(into)]
    theme: Signal<Theme>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    use_autoscroll(container, move || {
        messages.track();
        is_loading.track();
    });

    view! {
        <ScrollArea node_ref=container class="flex-grow p-4">
            <div role="log" aria-live="polite" aria-label="Chat messages">
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, message)| view! { <ChatMessage message=message theme=theme /> }
                />
            </div>
            <Show when=move || is_loading.get()>
                <TypingIndicator />
            </Show>
        </ScrollArea>
    }
}

/// Three bouncing dots shown while the assistant is replying.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    let dot = "inline-block w-2 h-2 bg-gray-400 dark:bg-gray-600 rounded-full";

    view! {
        <div
            class="flex justify-center items-center py-2"
            role="status"
            aria-label="Assistant is typing"
            data-testid="typing-indicator"
        >
            <div class="animate-bounce space-x-1 text-center">
                <span class=dot></span>
                <span class=format!("{dot} animation-delay-150")></span>
                <span class=format!("{dot} animation-delay-300")></span>
            </div>
        </div>
    }
}
