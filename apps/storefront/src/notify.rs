//! # Notifications
//!
//! Toasts are short user-visible messages produced by the stores
//! ("Added \"Atomic Habits\" to cart", "Signed out successfully").
//!
//! ```text
//!   CartStore ──┐
//!   AuthStore ──┼──► Notifier (UnboundedSender<Toast>) ──► ToastReceiver ──► UI
//!   Profile  ───┘
//! ```
//!
//! Sending never blocks and never fails the operation that produced the
//! toast: if the UI dropped its receiver the toast is discarded.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::trace;
use ts_rs::TS;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Receiving half handed to the UI.
pub type ToastReceiver = mpsc::UnboundedReceiver<Toast>;

/// Sending half shared by the stores.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Toast>,
}

impl Notifier {
    /// Creates a notifier and the receiver its toasts arrive on.
    pub fn channel() -> (Notifier, ToastReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Notifier { tx }, rx)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.send(Toast::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(Toast::error(message));
    }

    fn send(&self, toast: Toast) {
        trace!(kind = ?toast.kind, message = %toast.message, "Toast");
        // A closed channel only means nobody is listening
        let _ = self.tx.send(toast);
    }
}
