//! [`Clipboard`] over `navigator.clipboard`.

use wasm_bindgen_futures::JsFuture;

use super::web_dom::js_reason;
use crate::clipboard::Clipboard;
use crate::error::ClipboardError;

/// The async Clipboard API of the current window.
///
/// Insecure contexts have no `navigator.clipboard`; that is reported as
/// [`ClipboardError::Unavailable`] instead of throwing.
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let navigator = window.navigator();
        match js_sys::Reflect::has(&navigator, &"clipboard".into()) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(ClipboardError::Unavailable),
        }
        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(js_reason(&err)))
    }
}
