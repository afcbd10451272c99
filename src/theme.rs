//! Light/dark theme flag and the color classes it selects.
//!
//! Every color decision in the chat window goes through [`Theme`], so flipping
//! the flag flips the whole component tree.

use crate::chat::{Author, Message};

/// Class added to the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Color theme of the chat window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Accessible label for the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Page background behind the chat window.
    pub fn page(self) -> &'static str {
        match self {
            Self::Light => "bg-gray-100",
            Self::Dark => "bg-gray-900",
        }
    }

    /// Window heading text color.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Light => "text-gray-800",
            Self::Dark => "text-white",
        }
    }

    /// Class applied on the window itself so `dark:` variants resolve.
    pub fn scope(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => DARK_CLASS,
        }
    }

    /// Avatar circle background for an author.
    pub fn avatar(self, author: Author) -> &'static str {
        match (author, self) {
            (Author::Bot, Self::Light) => "bg-purple-500",
            (Author::Bot, Self::Dark) => "bg-purple-700",
            (Author::User, Self::Light) => "bg-blue-500",
            (Author::User, Self::Dark) => "bg-blue-700",
        }
    }

    /// Bubble background and text color for a message.
    pub fn bubble(self, message: &Message) -> &'static str {
        if message.is_error {
            return match self {
                Self::Light => "bg-red-100 text-red-900",
                Self::Dark => "bg-red-900 text-red-100",
            };
        }
        match (message.author, self) {
            (Author::Bot, Self::Light) => "bg-gray-200 text-black",
            (Author::Bot, Self::Dark) => "bg-gray-700 text-white",
            (Author::User, Self::Light) => "bg-blue-500 text-white",
            (Author::User, Self::Dark) => "bg-blue-600 text-white",
        }
    }

    /// Composer text field colors.
    pub fn field(self) -> &'static str {
        match self {
            Self::Light => "bg-white text-gray-800 border-gray-300 placeholder-gray-500",
            Self::Dark => "bg-gray-700 text-white border-gray-600 placeholder-gray-400",
        }
    }

    /// Icon color for the toggle control.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "text-gray-600",
            Self::Dark => "text-yellow-400",
        }
    }
}
