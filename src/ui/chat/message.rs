//! Single chat message bubble.

use leptos::prelude::*;

use crate::chat::Message;
use crate::markdown::render_markdown;
use crate::theme::Theme;
use crate::ui::components::{Avatar, BotIcon, UserIcon};

/// One message row: avatar plus a bubble with the rendered markdown.
///
/// Bot messages sit on the left, user messages on the right.
#[component]
pub fn ChatMessage(
    /// Message to render.
    message: Message,
    /// Active theme.
    #[prop(into)]
    theme: Signal<Theme>,
) -> impl IntoView {
    let author = message.author;
    let is_bot = message.is_bot();
    let body = render_markdown(&message.text);

    let (row, direction, author_tag) = if is_bot {
        ("justify-start", "flex-row", "bot")
    } else {
        ("justify-end", "flex-row-reverse", "user")
    };
    let bubble = move || {
        format!(
            "max-w-[70%] p-3 rounded-lg {}",
            theme.get().bubble(&message)
        )
    };

    view! {
        <div class=format!("flex items-end mb-4 animate-fadeIn {row}") data-author=author_tag>
            <div class=format!("flex items-end gap-2 {direction}")>
                <Avatar background=Signal::derive(move || theme.get().avatar(author))>
                    {if is_bot {
                        view! { <BotIcon class="text-white" /> }.into_any()
                    } else {
                        view! { <UserIcon class="text-white" /> }.into_any()
                    }}
                </Avatar>
                <div class=bubble>
                    <div class="prose max-w-none text-sm dark:prose-invert" inner_html=body></div>
                </div>
            </div>
        </div>
    }
}
