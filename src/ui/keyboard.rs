//! `/` shortcut that moves focus into the composer.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Key that focuses the composer.
pub const FOCUS_KEY: &str = "/";

/// Input types that accept free text.
const TEXT_INPUT_TYPES: &[&str] = &[
    "text", "search", "email", "url", "tel", "password", "number", "date",
    "datetime-local", "month", "time", "week",
];

/// Where keyboard focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Nothing focused, or the document body.
    Page,
    /// A button, link, checkbox or other non-text control.
    Control,
    /// Somewhere the user types text.
    TextEntry,
}

impl FocusTarget {
    /// Classify an element by tag name, `type` attribute and contenteditable.
    pub fn classify(tag_name: &str, input_type: Option<&str>, content_editable: bool) -> Self {
        if content_editable {
            return Self::TextEntry;
        }
        match tag_name.to_ascii_lowercase().as_str() {
            "textarea" | "select" => Self::TextEntry,
            "input" => {
                let kind = input_type.unwrap_or("text").to_ascii_lowercase();
                if TEXT_INPUT_TYPES.contains(&kind.as_str()) {
                    Self::TextEntry
                } else {
                    Self::Control
                }
            }
            "body" | "html" => Self::Page,
            _ => Self::Control,
        }
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl held.
    pub ctrl: bool,
    /// Meta/Cmd held.
    pub meta: bool,
    /// Alt/Option held.
    pub alt: bool,
}

impl Modifiers {
    fn any(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Whether a key press should move focus into the composer.
pub fn should_focus_composer(key: &str, modifiers: Modifiers, focus: FocusTarget) -> bool {
    key == FOCUS_KEY && !modifiers.any() && focus != FocusTarget::TextEntry
}

/// Install the shortcut for the lifetime of the calling component.
///
/// The listener sits on `window` and is removed when the owner is cleaned up.
/// Server renders have no window, so nothing is installed there.
pub fn use_focus_shortcut(target: NodeRef<html::Input>) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    let handle = window_event_listener(ev::keydown, move |event| {
        let modifiers = Modifiers {
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            alt: event.alt_key(),
        };
        if !should_focus_composer(&event.key(), modifiers, active_focus()) {
            return;
        }
        event.prevent_default();
        if let Some(input) = target.get_untracked() {
            if let Err(err) = input.focus() {
                leptos::logging::warn!("could not focus composer: {err:?}");
            }
        }
    });
    on_cleanup(move || handle.remove());
}

fn active_focus() -> FocusTarget {
    let Some(element) = document().active_element() else {
        return FocusTarget::Page;
    };
    let content_editable = element
        .dyn_ref::<web_sys::HtmlElement>()
        .is_some_and(web_sys::HtmlElement::is_content_editable);
    FocusTarget::classify(
        &element.tag_name(),
        element.get_attribute("type").as_deref(),
        content_editable,
    )
}
