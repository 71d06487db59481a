//! Flash message dismissal styles.
//!
//! Flash messages are rendered by the server with the marker class from
//! [`crate::config::UiConfig::flash_class`]. Each one found at scan time gets
//! its own timer; messages inserted later are left alone.

use crate::dom::NodeId;
use crate::timer::TimerHandle;

pub const FADE_TRANSITION: (&str, &str) = ("transition", "opacity 0.3s ease");
pub const FADE_OPACITY: (&str, &str) = ("opacity", "0");

/// Scheduled dismissal of one flash message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashDismissal {
    pub node: NodeId,
    /// Starts the fade. Cancelling it keeps the message on the page.
    pub timer: TimerHandle,
}
