//! Round avatar badge.

use leptos::prelude::*;

/// Avatar circle that frames an icon.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar background=Signal::derive(move || theme.get().avatar(Author::Bot))>
///         <BotIcon class="text-white" />
///     </Avatar>
/// }
/// ```
#[component]
pub fn Avatar(
    /// Background color class, e.g. `bg-purple-500`.
    #[prop(into)]
    background: Signal<&'static str>,
    /// Size class (e.g., "w-8 h-8").
    #[prop(default = "w-8 h-8")]
    size: &'static str,
    /// Avatar content, usually an icon.
    children: Children,
) -> impl IntoView {
    let classes = move || {
        format!(
            "flex shrink-0 items-center justify-center rounded-full {size} {}",
            background.get()
        )
    };

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
