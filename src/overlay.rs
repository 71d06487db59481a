//! Loading overlay markup.

use crate::config::UiConfig;
use crate::dom::Element;

pub const SPINNER_MARGIN: &str = "0 auto 1rem";
pub const MESSAGE_COLOR: &str = "#6b7280";

/// Full-page overlay: a boxed spinner above `message`.
#[must_use]
pub fn overlay_element(config: &UiConfig, message: &str) -> Element {
    Element::new("div")
        .with_id(config.overlay_id.as_str())
        .with_class("message-overlay")
        .with_child(
            Element::new("div")
                .with_class("message-box")
                .with_child(
                    Element::new("div")
                        .with_class("spinner spinner-lg")
                        .with_style("margin", SPINNER_MARGIN),
                )
                .with_child(Element::new("p").with_style("color", MESSAGE_COLOR).with_text(message)),
        )
}
