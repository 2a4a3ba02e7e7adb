//! The outcome of checking one account.

/// The outcome of checking one account once.
///
/// Produced by a poller task, consumed exactly once by the registry.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The account that was checked.
    pub account_name: String,

    /// When the check completed.
    pub timestamp: crate::Timestamp,

    /// Unread messages summed over the configured folders, or the failure.
    pub outcome: Result<u32, error_classifier::CheckError>,
}

impl CheckResult {
    /// A successful check.
    pub fn success(
        account_name: impl Into<String>,
        timestamp: crate::Timestamp,
        unread_count: u32,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            timestamp,
            outcome: Ok(unread_count),
        }
    }

    /// A failed check.
    pub fn failure(
        account_name: impl Into<String>,
        timestamp: crate::Timestamp,
        error: error_classifier::CheckError,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            timestamp,
            outcome: Err(error),
        }
    }
}
