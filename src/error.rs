//! Error types for the UI utilities.
//!
//! ERROR HANDLING
//! ==============
//! Core operations return typed errors so host failures are visible in tests
//! and logs. The browser exports log and swallow them, so page scripts never
//! observe an exception from a notification helper.

/// Failure reported by a [`crate::dom::Dom`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The document has no `<body>` to attach nodes to.
    #[error("document has no body")]
    MissingBody,
    /// The host refused to create or attach an element.
    #[error("failed to create <{tag}>: {reason}")]
    Create { tag: String, reason: String },
    /// A style declaration could not be applied.
    #[error("failed to set style {property}: {reason}")]
    Style { property: String, reason: String },
}

/// Failure of a host clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard capability in this environment.
    #[error("clipboard unavailable")]
    Unavailable,
    /// The host rejected the write (permissions, focus, etc.).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Error returned by [`crate::config::UiConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse ui config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid ui config: {0}")]
    Invalid(String),
}
