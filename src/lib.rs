//! # curriculum-ui
//!
//! Browser UI helpers for the curriculum pages: toast notifications, the
//! loading overlay, flash message auto-dismissal, date/time display strings,
//! mobile detection, and copy-to-clipboard feedback.
//!
//! The logic lives in [`ui::UiCore`], which works against a [`dom::Dom`]
//! handle and a virtual [`timer::TimerQueue`] so it runs and tests without a
//! rendering surface. The `browser` feature adds the WebAssembly layer that
//! binds it to the live document and exports the page-facing functions
//! (`showToast`, `showLoading`, `hideLoading`, `formatDate`, `formatTime`,
//! `isMobile`, `copyToClipboard`).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`ui`] | Toast, overlay, and flash state plus scheduled DOM work |
//! | [`dom`] | Host document trait, element descriptions, in-memory document |
//! | [`timer`] | Cancellable tasks on a virtual clock |
//! | [`toast`] | Toast markup and severity icons |
//! | [`overlay`] | Loading overlay markup |
//! | [`flash`] | Flash message fade styles |
//! | [`clipboard`] | Clipboard trait and copy-with-feedback flow |
//! | [`format`] | Date and time display strings |
//! | [`device`] | User agent mobile detection |
//! | [`config`] | Timings, ids, and marker classes |
//! | [`error`] | Error types |
//! | `browser` | `web-sys` bindings and JS exports (feature `browser`) |

pub mod clipboard;
pub mod config;
pub mod device;
pub mod dom;
pub mod error;
pub mod flash;
pub mod format;
pub mod overlay;
pub mod timer;
pub mod toast;
pub mod ui;

#[cfg(feature = "browser")]
pub mod browser;
