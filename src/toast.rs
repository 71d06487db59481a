//! Toast notification markup and severity icons.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::UiConfig;
use crate::dom::{Element, NodeId};
use crate::timer::TimerHandle;

pub const EXIT_ANIMATION_PROPERTY: &str = "animation";
pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

/// Recognized toast tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
}

impl Severity {
    /// Parse an exact tag; anything else is unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Font Awesome icon class.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-times-circle",
            Self::Warning => "fa-exclamation-triangle",
        }
    }
}

/// Icon for a raw tag. Unrecognized tags use the success icon.
#[must_use]
pub fn icon_for_tag(tag: &str) -> &'static str {
    Severity::from_tag(tag).unwrap_or_default().icon()
}

/// `div.toast.<tag>` holding the severity icon and the message text.
///
/// The raw tag is kept as a class even when it is not a recognized severity.
#[must_use]
pub fn toast_element(config: &UiConfig, message: &str, tag: &str) -> Element {
    Element::new("div")
        .with_class(&config.toast_class)
        .with_class(tag)
        .with_child(Element::new("i").with_class("fas").with_class(icon_for_tag(tag)))
        .with_child(Element::new("span").with_text(message))
}

/// A toast currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    pub node: NodeId,
    /// Fires the exit animation. Cancelling it keeps the toast up.
    pub timer: TimerHandle,
}
