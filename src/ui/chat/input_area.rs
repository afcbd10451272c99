//! Chat input area component.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::theme::Theme;
use crate::ui::components::{Button, ButtonVariant, Input, SendIcon};

/// Composer: the draft field and the send button.
///
/// The send button is disabled while a reply is pending. Submitting the form
/// only reports the intent; the owner decides whether the draft is accepted.
#[component]
pub fn ChatInputArea(
    /// Handle to the text field, used by the `/` shortcut.
    #[prop(optional)]
    input_ref: NodeRef<html::Input>,
    /// Current draft.
    #[prop(into)]
    draft: Signal<String>,
    /// Whether a reply is pending.
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Active theme.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Called with the new draft after each edit.
    on_input: Callback<String>,
    /// Called when the form is submitted.
    on_submit: Callback<()>,
) -> impl IntoView {
    let field_class = Signal::derive(move || theme.get().field().to_string());

    view! {
        <form
            class="p-4 border-t dark:border-gray-700"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="flex items-center relative">
                <Input
                    node_ref=input_ref
                    value=draft
                    on_input=on_input
                    placeholder="Type your message... (Press '/' to focus)"
                    aria_label="Message"
                    class=field_class
                />
                <Button
                    variant=ButtonVariant::Primary
                    button_type="submit"
                    disabled=is_loading
                    aria_label=Signal::stored("Send message".to_string())
                    class="absolute right-2"
                >
                    <SendIcon />
                </Button>
            </div>
        </form>
    }
}
