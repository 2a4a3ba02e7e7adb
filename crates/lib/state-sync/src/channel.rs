//! The producer side of the handoff.

use account_registry::CheckResult;

/// A message for the consumer.
#[derive(Debug)]
pub enum Message {
    /// Apply a check result.
    CheckResult(CheckResult),

    /// Show the full status report.
    ShowStatus,
}

/// The consumer is gone.
#[derive(Debug, thiserror::Error)]
#[error("state synchronizer is closed")]
pub struct Closed;

/// Cloneable producer handle.
///
/// Sending never blocks.
#[derive(Debug, Clone)]
pub struct Submitter {
    tx: tokio::sync::mpsc::UnboundedSender<Message>,
}

impl Submitter {
    /// Queue a check result.
    pub fn submit(&self, result: CheckResult) -> Result<(), Closed> {
        self.send(Message::CheckResult(result))
    }

    /// Queue a full report request behind everything submitted so far.
    pub fn request_status(&self) -> Result<(), Closed> {
        self.send(Message::ShowStatus)
    }

    /// Queue a message.
    pub fn send(&self, message: Message) -> Result<(), Closed> {
        self.tx.send(message).map_err(|_| Closed)
    }
}

/// The consumer side of the handoff.
#[derive(Debug)]
pub struct Inbox {
    pub(crate) rx: tokio::sync::mpsc::UnboundedReceiver<Message>,
}

impl Inbox {
    /// Take the next message, in submission order.
    pub async fn recv(&mut self) -> Option<Message> {
        self.rx.recv().await
    }
}

/// Create a connected submitter and inbox.
pub fn channel() -> (Submitter, Inbox) {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    (Submitter { tx }, Inbox { rx })
}
