//! Scrollable area component.

use leptos::html;
use leptos::prelude::*;

/// Scrollable container component.
///
/// Provides a styled vertical scroll area with a thin scrollbar that follows
/// the `dark` scope. Pass a `node_ref` to drive the scroll position.
///
/// # Example
///
/// ```rust,ignore
/// let list_ref = NodeRef::<html::Div>::new();
/// view! {
///     <ScrollArea node_ref=list_ref class="flex-grow p-4">
///         // Long content here
///     </ScrollArea>
/// }
/// ```
#[component]
pub fn ScrollArea(
    /// Handle to the scrolling element.
    #[prop(optional)]
    node_ref: NodeRef<html::Div>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "overflow-y-auto scrollbar-thin scrollbar-thumb-gray-300 \
         dark:scrollbar-thumb-gray-600 {}",
        class
    );

    view! {
        <div node_ref=node_ref class=classes>
            {children()}
        </div>
    }
}
