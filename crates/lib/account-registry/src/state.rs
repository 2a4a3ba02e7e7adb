//! Per-account state.

use error_classifier::{ErrorCause, ErrorKind};

/// The most recent failure of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Classification of the failure.
    pub kind: ErrorKind,

    /// The cause the failure was classified by.
    pub cause: ErrorCause,

    /// Human-readable description.
    pub message: String,

    /// When the failing check completed.
    pub timestamp: crate::Timestamp,
}

/// What we know about an account.
///
/// `unread_count` and `last_success` change together and only on success;
/// `last_error` reflects the latest attempt only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    /// When the last check completed, successfully or not.
    pub last_attempt: Option<crate::Timestamp>,

    /// When the last successful check completed.
    pub last_success: Option<crate::Timestamp>,

    /// Last known unread count, `None` until the first successful check.
    pub unread_count: Option<u32>,

    /// The failure of the latest attempt, if it failed.
    pub last_error: Option<ErrorInfo>,
}

impl AccountState {
    /// Whether the latest attempt failed with an unexpected error.
    pub fn has_unexpected_error(&self) -> bool {
        self.last_error
            .as_ref()
            .is_some_and(|error| error.kind == ErrorKind::Unexpected)
    }

    /// Whether the latest attempt failed at all.
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }
}

/// A named account state, as found in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The account name.
    pub name: String,

    /// The account state at snapshot time.
    pub state: AccountState,
}

/// A read-only copy of the registry, in configuration order.
pub type Snapshot = Vec<Entry>;
