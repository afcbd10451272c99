//! Keep the message list pinned to its newest entry.

use leptos::html;
use leptos::prelude::*;

/// Scroll geometry of a container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Full height of the content.
    pub scroll_height: i32,
    /// Visible height of the container.
    pub client_height: i32,
}

impl ScrollMetrics {
    /// Read the geometry of a DOM element.
    pub fn of(element: &web_sys::Element) -> Self {
        Self {
            scroll_height: element.scroll_height(),
            client_height: element.client_height(),
        }
    }

    /// Largest `scrollTop` the container accepts.
    pub fn max_scroll_top(self) -> i32 {
        (self.scroll_height - self.client_height).max(0)
    }
}

/// Scroll `element` all the way down.
pub fn pin_to_bottom(element: &web_sys::Element) {
    element.set_scroll_top(ScrollMetrics::of(element).max_scroll_top());
}

/// Re-pin `container` after every change reported by `track`.
///
/// `track` should read whatever signals describe the list contents so the
/// effect re-runs when they change.
pub fn use_autoscroll(container: NodeRef<html::Div>, track: impl Fn() + 'static) {
    Effect::new(move |_| {
        track();
        if let Some(element) = container.get() {
            pin_to_bottom(&element);
        }
    });
}
