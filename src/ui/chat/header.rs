//! Chat header component.

use leptos::prelude::*;

use crate::theme::Theme;
use crate::ui::components::{Button, ButtonVariant, MoonIcon, SunIcon};

/// Chat header with the window title and the theme toggle.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(into)]
    title: String,
    /// Active theme.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Called when the theme toggle is pressed.
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let toggle_label = Signal::derive(move || theme.get().toggle_label().to_string());

    view! {
        <header class="flex justify-between items-center p-4 border-b dark:border-gray-700">
            <h2 class=move || format!("text-xl font-bold {}", theme.get().heading())>{title}</h2>

            <Button
                variant=ButtonVariant::Ghost
                aria_label=toggle_label
                on_click=on_toggle_theme
            >
                {move || {
                    let current = theme.get();
                    if current.is_dark() {
                        view! { <SunIcon class=current.toggle_icon() /> }.into_any()
                    } else {
                        view! { <MoonIcon class=current.toggle_icon() /> }.into_any()
                    }
                }}
            </Button>
        </header>
    }
}
