//! Copy-to-clipboard with toast feedback.
//!
//! ERROR HANDLING
//! ==============
//! A failed write always becomes an error toast. The failure is logged at
//! debug level and never returned: callers only learn the outcome from the
//! toast the user sees.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::cell::RefCell;
use std::future::Future;

use crate::dom::Dom;
use crate::error::ClipboardError;
use crate::ui::UiCore;

pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy";

/// Host text clipboard.
pub trait Clipboard {
    /// Resolve once the host has accepted or rejected the write.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Write `text` and report the outcome as a toast.
///
/// The core is only borrowed after the write settles, so other UI calls can
/// run while the host clipboard is pending.
pub async fn copy_to_clipboard<D, C>(ui: &RefCell<UiCore<D>>, clipboard: &C, text: &str)
where
    D: Dom,
    C: Clipboard,
{
    let outcome = clipboard.write_text(text).await;
    if let Err(err) = ui.borrow_mut().report_copy(outcome) {
        log::warn!("clipboard: failed to show result toast: {err}");
    }
}
