//! # Dialog Events
//!
//! One-shot delivery of dialog requests to the presentation layer.
//!
//! ```text
//! resume / show_dialog ──post──► mpsc ──recv──► presentation layer
//!                                              (renders, then calls
//!                                               present_dialog / dialog_action)
//! ```
//!
//! Each posted dialog is received exactly once.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use launcher_core::Dialog;

/// Sending half of the dialog event stream.
#[derive(Debug, Clone)]
pub struct DialogEvents {
    tx: UnboundedSender<Dialog>,
}

impl DialogEvents {
    /// Creates the event stream; the receiver goes to the presentation layer.
    pub fn channel() -> (Self, UnboundedReceiver<Dialog>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DialogEvents { tx }, rx)
    }

    /// Queues `dialog` for display. Returns `false` if nobody is listening.
    pub fn post(&self, dialog: Dialog) -> bool {
        match self.tx.send(dialog) {
            Ok(()) => {
                debug!(%dialog, "Dialog posted");
                true
            }
            Err(_) => {
                warn!(%dialog, "Dialog dropped: presentation layer is gone");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_each_dialog_delivered_once() {
        let (events, mut rx) = DialogEvents::channel();
        assert!(events.post(Dialog::Review));
        assert!(events.post(Dialog::About));

        assert_eq!(rx.recv().await, Some(Dialog::Review));
        assert_eq!(rx.recv().await, Some(Dialog::About));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_post_without_receiver() {
        let (events, rx) = DialogEvents::channel();
        drop(rx);
        assert!(!events.post(Dialog::Share));
    }
}
