//! A single account check.

use account_registry::CheckResult;
use error_classifier::CheckError;
use mail_counter_core::UnreadCounter;

/// A configured mail account.
#[derive(Debug)]
pub struct Account<C> {
    /// Unique account name.
    pub name: String,

    /// Folders whose unread counts are summed, in order.
    pub folders: Vec<String>,

    /// The client, created once and reused for every check.
    pub counter: C,
}

/// Sum the unread counts of every folder of the account.
///
/// The first failing folder fails the whole check.
pub async fn check_account<C: UnreadCounter>(account: &Account<C>) -> CheckResult {
    tracing::debug!(account = %account.name, folders = ?account.folders, "checking account");

    let mut unread = 0u32;
    let mut failure = None;
    for folder in &account.folders {
        match account.counter.unread_count(folder).await {
            Ok(count) => unread = unread.saturating_add(count),
            Err(error) => {
                tracing::debug!(account = %account.name, %folder, %error, "folder check failed");
                failure = Some(CheckError::from_source(error));
                break;
            }
        }
    }

    let timestamp = chrono::Local::now();
    match failure {
        None => {
            tracing::info!(account = %account.name, unread, "account checked");
            CheckResult::success(&account.name, timestamp, unread)
        }
        Some(error) => {
            tracing::warn!(
                account = %account.name,
                cause = %error.cause,
                %error,
                "account check failed"
            );
            CheckResult::failure(&account.name, timestamp, error)
        }
    }
}
