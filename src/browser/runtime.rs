//! Shared core handle that arms real timers.

use std::cell::RefCell;
use std::rc::Rc;

use super::clipboard::NavigatorClipboard;
use super::web_dom::WebDom;
use crate::config::UiConfig;
use crate::timer::MAX_TIMER_DELAY;
use crate::ui::UiCore;

/// Cloneable handle to the page's [`UiCore`].
///
/// After every operation the handle drains newly scheduled timers and sleeps
/// on each in a local task that fires it. Cancelled handles still wake up but
/// fire as no-ops.
#[derive(Clone)]
pub struct BrowserUi {
    core: Rc<RefCell<UiCore<WebDom>>>,
}

impl BrowserUi {
    #[must_use]
    pub fn new(dom: WebDom, config: UiConfig) -> Self {
        Self { core: Rc::new(RefCell::new(UiCore::with_config(dom, config))) }
    }

    /// Run `f` against the core, then arm whatever it scheduled.
    pub fn with_core<R>(&self, f: impl FnOnce(&mut UiCore<WebDom>) -> R) -> R {
        let result = f(&mut self.core.borrow_mut());
        self.arm_timers();
        result
    }

    pub async fn copy_to_clipboard(&self, text: &str) {
        crate::clipboard::copy_to_clipboard(&self.core, &NavigatorClipboard, text).await;
        self.arm_timers();
    }

    fn arm_timers(&self) {
        let scheduled = self.core.borrow_mut().take_scheduled();
        for (handle, delay) in scheduled {
            let ui = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // setTimeout fires longer delays at once; hold them at the cap instead.
                gloo_timers::future::sleep(delay.min(MAX_TIMER_DELAY)).await;
                if !ui.with_core(|core| core.fire(handle)) {
                    log::debug!("timer: handle {} was cancelled", handle.raw());
                }
            });
        }
    }
}
