//! Input component for text fields.

use leptos::html;
use leptos::prelude::*;

/// Text input bound to a string signal.
///
/// The field is controlled: it shows `value` and reports every edit through
/// `on_input`, leaving the owner to decide what to store.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         node_ref=input_ref
///         value=draft
///         on_input=Callback::new(move |text| state.update(|s| s.set_draft(text)))
///         placeholder="Type your message..."
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Handle to the input element, for focus management.
    #[prop(optional)]
    node_ref: NodeRef<html::Input>,
    /// Current value.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value after each edit.
    on_input: Callback<String>,
    /// Input type (text, search, ...).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Accessible label.
    #[prop(default = "")]
    aria_label: &'static str,
    /// Color classes; reactive so they can follow the theme.
    #[prop(into, default = Signal::stored(String::new()))]
    class: Signal<String>,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "flex-grow px-4 py-2 pr-10 border rounded-full \
                        focus:outline-none focus:ring-2 focus:ring-blue-500";

    view! {
        <input
            node_ref=node_ref
            type=input_type
            class=move || format!("{} {}", base_classes, class.get())
            placeholder=placeholder
            aria-label=aria_label
            autocomplete=autocomplete
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
