//! JavaScript entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page scripts and inline handlers call these exports the same way they
//! would call plain global functions. One [`BrowserUi`] per page backs them,
//! created on first use from the window's document. Failures are logged and
//! swallowed so a notification helper never throws into page code.

mod clipboard;
mod runtime;
mod web_dom;

pub use clipboard::NavigatorClipboard;
pub use runtime::BrowserUi;
pub use web_dom::WebDom;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::UiConfig;
use crate::format::DateInput;
use crate::timer::delay_from_millis;
use crate::toast::Severity;

thread_local! {
    static UI: RefCell<Option<BrowserUi>> = const { RefCell::new(None) };
}

/// The page's UI handle, created on first use.
fn ui() -> Option<BrowserUi> {
    UI.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = WebDom::from_window().map(|dom| BrowserUi::new(dom, UiConfig::default()));
        }
        if slot.is_none() {
            log::warn!("ui: no window document available");
        }
        slot.clone()
    })
}

fn date_input(value: &JsValue) -> DateInput {
    if value.is_null() {
        return DateInput::epoch();
    }
    if let Some(date) = value.dyn_ref::<js_sys::Date>() {
        return DateInput::from_epoch_millis(date.get_time());
    }
    if let Some(text) = value.as_string() {
        return DateInput::Text(text);
    }
    if let Some(ms) = value.as_f64() {
        return DateInput::from_epoch_millis(ms);
    }
    DateInput::Invalid
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"curriculum-ui: logger already installed".into());
    }
    on_dom_ready(init_flash_messages);
}

/// Run `f` once the document has parsed, or now if that already happened.
fn on_dom_ready(f: fn()) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(move || f());
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::warn!("init: failed to listen for DOMContentLoaded: {}", web_dom::js_reason(&err));
    }
}

/// Override timings, ids, or marker classes from a JSON object.
///
/// # Errors
///
/// Rejects malformed or invalid config with a message string.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = UiConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    if let Some(ui) = ui() {
        ui.with_core(|core| core.set_config(config));
    }
    Ok(())
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>, duration: Option<f64>) {
    let Some(ui) = ui() else {
        return;
    };
    let tag = kind.as_deref().unwrap_or(Severity::Success.as_tag());
    let duration = duration.map(delay_from_millis);
    if let Err(err) = ui.with_core(|core| core.show_toast(message, tag, duration)) {
        log::warn!("showToast: {err}");
    }
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(message: Option<String>) {
    let Some(ui) = ui() else {
        return;
    };
    if let Err(err) = ui.with_core(|core| core.show_loading(message.as_deref())) {
        log::warn!("showLoading: {err}");
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    if let Some(ui) = ui() {
        if !ui.with_core(|core| core.hide_loading()) {
            log::debug!("hideLoading: no overlay shown");
        }
    }
}

#[wasm_bindgen(js_name = initFlashMessages)]
pub fn init_flash_messages() {
    if let Some(ui) = ui() {
        let dismissals = ui.with_core(|core| core.init_flash_messages());
        log::debug!("initFlashMessages: {} message(s) scheduled", dismissals.len());
    }
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &JsValue) -> String {
    crate::format::format_date(date_input(date))
}

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(date: &JsValue) -> String {
    crate::format::format_time(date_input(date))
}

#[wasm_bindgen(js_name = isMobile)]
pub fn is_mobile() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.navigator().user_agent() {
        Ok(user_agent) => crate::device::is_mobile(&user_agent),
        Err(_) => false,
    }
}

/// Resolves once the result toast is shown; never rejects.
#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(text: String) {
    if let Some(ui) = ui() {
        ui.copy_to_clipboard(&text).await;
    }
}
