//! Mirror the theme onto the host document.

use leptos::prelude::*;

use crate::theme::{DARK_CLASS, Theme};

/// Keep the `dark` class on `<html>` in step with `theme`.
///
/// Global stylesheet rules (scrollbars, `dark:` variants outside the window)
/// key off the document root, not the component tree.
pub fn use_document_theme(theme: Signal<Theme>) {
    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
            leptos::logging::warn!("could not update document theme: {err:?}");
        }
    });
}
