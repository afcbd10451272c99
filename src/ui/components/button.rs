//! Round icon button with visual variants.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Accent-filled action button.
    #[default]
    Primary,
    /// Transparent button that only tints on hover.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-500 text-white hover:bg-blue-600 focus:ring-2 focus:ring-blue-500",
            Self::Ghost => "bg-transparent hover:bg-gray-200 dark:hover:bg-gray-700",
        }
    }
}

/// Round icon-only button. `aria_label` carries the accessible name.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button
///         variant=ButtonVariant::Ghost
///         aria_label="Switch to dark mode"
///         on_click=Callback::new(move |()| state.update(ChatState::toggle_theme))
///     >
///         <MoonIcon />
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Whether the button is disabled.
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label, for icon-only buttons.
    #[prop(into, optional)]
    aria_label: Option<Signal<String>>,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center font-medium \
                        transition-colors duration-300 focus:outline-none \
                        disabled:cursor-not-allowed disabled:opacity-50 p-2 rounded-full";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get()
            aria-label=move || aria_label.map(|label| label.get())
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
