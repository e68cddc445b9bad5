//! Clipboard and link-activation capabilities for the email copy action.

use super::TOAST_PREFIX;
use thiserror::Error;

/// Reasons a clipboard write can fail. Never shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard permission denied")]
    PermissionDenied,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Privileged text clipboard (`navigator.clipboard` in a browser).
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The activation event of a link element.
pub trait LinkEvent {
    /// Stop the browser from following the link.
    fn prevent_default(&mut self);
}

/// Toast text confirming a copied address.
pub fn copied_message(email: &str) -> String {
    format!("{TOAST_PREFIX}{email}")
}
