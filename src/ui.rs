//! Notification state and scheduled DOM work.
//!
//! ARCHITECTURE
//! ============
//! [`UiCore`] owns the document handle, the configuration, and a virtual
//! timer queue. Every operation mutates the document immediately and records
//! follow-up work (toast exit, flash fade, node removal) as a [`Task`] behind
//! a [`TimerHandle`]. Nothing here sleeps: the browser layer arms a real timer
//! per scheduled handle and calls [`UiCore::fire`], while tests step the
//! clock with [`UiCore::advance`].
//!
//! INVARIANTS
//! ==========
//! - At most one toast node is attached after any [`UiCore::show_toast`].
//! - At most one loading overlay is attached; a second `show_loading`
//!   replaces the first.
//! - Tasks against nodes that are already gone are no-ops.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::time::Duration;

use crate::clipboard::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};
use crate::config::UiConfig;
use crate::dom::{Dom, NodeId};
use crate::error::{ClipboardError, DomError};
use crate::flash::{FADE_OPACITY, FADE_TRANSITION, FlashDismissal};
use crate::overlay::overlay_element;
use crate::timer::{TimerHandle, TimerQueue};
use crate::toast::{EXIT_ANIMATION, EXIT_ANIMATION_PROPERTY, Severity, Toast, toast_element};

/// Deferred document work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Start the toast exit animation, then schedule removal.
    ExitToast(NodeId),
    /// Start a flash message fade, then schedule removal.
    FadeFlash(NodeId),
    Remove(NodeId),
}

pub struct UiCore<D: Dom> {
    dom: D,
    config: UiConfig,
    timers: TimerQueue<Task>,
    /// Toast on screen and its next pending timer.
    active_toast: Option<Toast>,
}

impl<D: Dom> UiCore<D> {
    #[must_use]
    pub fn new(dom: D) -> Self {
        Self::with_config(dom, UiConfig::default())
    }

    #[must_use]
    pub fn with_config(dom: D, config: UiConfig) -> Self {
        Self { dom, config, timers: TimerQueue::new(), active_toast: None }
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Replace the configuration. Pending timers keep their original delays.
    pub fn set_config(&mut self, config: UiConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    #[must_use]
    pub fn active_toast(&self) -> Option<Toast> {
        self.active_toast
    }

    // --- Toasts ---

    /// Replace any visible toast with a new one.
    ///
    /// `tag` becomes a style class as given; unrecognized tags get the success
    /// icon. The toast starts its exit after `duration` (default from config)
    /// and is removed when the exit window ends.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the host cannot attach the node.
    pub fn show_toast(&mut self, message: &str, tag: &str, duration: Option<Duration>) -> Result<Toast, DomError> {
        self.clear_toasts();
        let node = self.dom.append(&toast_element(&self.config, message, tag))?;
        let duration = duration.unwrap_or_else(|| self.config.toast_duration());
        let timer = self.timers.schedule(duration, Task::ExitToast(node));
        let toast = Toast { node, timer };
        self.active_toast = Some(toast);
        log::debug!("toast: shown {tag} toast for {}ms", duration.as_millis());
        Ok(toast)
    }

    /// Show a toast with a recognized severity and the default duration.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the host cannot attach the node.
    pub fn notify(&mut self, message: &str, severity: Severity) -> Result<Toast, DomError> {
        self.show_toast(message, severity.as_tag(), None)
    }

    fn clear_toasts(&mut self) {
        if let Some(previous) = self.active_toast.take() {
            self.timers.cancel(previous.timer);
        }
        for node in self.dom.query_class(&self.config.toast_class) {
            self.dom.remove(node);
        }
    }

    // --- Loading overlay ---

    /// Attach the loading overlay, replacing one that is already shown.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the host cannot attach the node.
    pub fn show_loading(&mut self, message: Option<&str>) -> Result<NodeId, DomError> {
        if let Some(existing) = self.dom.find_by_id(&self.config.overlay_id) {
            log::debug!("overlay: replacing visible loading overlay");
            self.dom.remove(existing);
        }
        let message = message.unwrap_or(self.config.loading_message.as_str());
        self.dom.append(&overlay_element(&self.config, message))
    }

    /// Remove the loading overlay. Returns `false` if none was shown.
    pub fn hide_loading(&mut self) -> bool {
        match self.dom.find_by_id(&self.config.overlay_id) {
            Some(node) => self.dom.remove(node),
            None => false,
        }
    }

    // --- Flash messages ---

    /// Schedule a fade and removal for each flash message present now.
    pub fn init_flash_messages(&mut self) -> Vec<FlashDismissal> {
        let delay = self.config.flash_delay();
        let nodes = self.dom.query_class(&self.config.flash_class);
        log::debug!("flash: scheduling dismissal of {} message(s)", nodes.len());
        nodes
            .into_iter()
            .map(|node| FlashDismissal { node, timer: self.timers.schedule(delay, Task::FadeFlash(node)) })
            .collect()
    }

    // --- Clipboard ---

    /// Turn a settled clipboard write into the matching toast.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] only if the toast itself cannot be shown.
    pub fn report_copy(&mut self, outcome: Result<(), ClipboardError>) -> Result<Toast, DomError> {
        match outcome {
            Ok(()) => self.notify(COPY_SUCCESS_MESSAGE, Severity::Success),
            Err(err) => {
                log::debug!("clipboard: write failed: {err}");
                self.notify(COPY_FAILURE_MESSAGE, Severity::Error)
            }
        }
    }

    // --- Timers ---

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.is_pending(handle)
    }

    /// Cancel a pending task. Returns `false` if it already ran.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.cancel(handle)
    }

    /// Run one task now, whatever its due time. Unknown handles are ignored.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        match self.timers.take(handle) {
            Some(task) => {
                self.run(task);
                true
            }
            None => false,
        }
    }

    /// Step the clock by `by`, running every task that falls due in order.
    ///
    /// Tasks scheduled while stepping run too if they fall inside the window.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timers.now().saturating_add(by);
        let mut ran = 0;
        while let Some((_, task)) = self.timers.pop_due(until) {
            self.run(task);
            ran += 1;
        }
        self.timers.advance_clock(until);
        ran
    }

    /// Handles scheduled since the last call, for hosts that arm real timers.
    pub fn take_scheduled(&mut self) -> Vec<(TimerHandle, Duration)> {
        self.timers.take_scheduled()
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::ExitToast(node) => {
                self.apply_style(node, EXIT_ANIMATION_PROPERTY, EXIT_ANIMATION);
                let removal = self.timers.schedule(self.config.toast_exit(), Task::Remove(node));
                if let Some(active) = self.active_toast.as_mut().filter(|t| t.node == node) {
                    active.timer = removal;
                }
            }
            Task::FadeFlash(node) => {
                self.apply_style(node, FADE_TRANSITION.0, FADE_TRANSITION.1);
                self.apply_style(node, FADE_OPACITY.0, FADE_OPACITY.1);
                self.timers.schedule(self.config.flash_fade(), Task::Remove(node));
            }
            Task::Remove(node) => {
                if !self.dom.remove(node) {
                    log::debug!("timer: node {} already detached", node.raw());
                }
                if self.active_toast.is_some_and(|t| t.node == node) {
                    self.active_toast = None;
                }
            }
        }
    }

    fn apply_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Err(err) = self.dom.set_style(node, property, value) {
            log::warn!("style: {err}");
        }
    }
}
