//! Decides which notifications a state transition deserves.

use account_registry::{AccountState, Timestamp};

/// Title of the new mail notification.
pub const NEW_MAIL_TITLE: &str = "Mail Notice";

/// Title of the error notification.
pub const ERROR_TITLE: &str = "Mail Error";

/// A notification to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Unread mail appeared where there was none.
    NewMail {
        /// The account with new mail.
        account: String,
    },

    /// A check failed unexpectedly.
    Error {
        /// The account that failed.
        account: String,

        /// When the failing check completed.
        timestamp: Timestamp,

        /// The failure description.
        message: String,
    },
}

impl Notification {
    /// The notification title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NewMail { .. } => NEW_MAIL_TITLE,
            Self::Error { .. } => ERROR_TITLE,
        }
    }

    /// The notification body.
    pub fn message(&self) -> String {
        match self {
            Self::NewMail { account } => format!("New mail at {account}"),
            Self::Error {
                account,
                timestamp,
                message,
            } => format!(
                "Error checking {account} mail at {}: {message}",
                display_format::timestamp(timestamp)
            ),
        }
    }
}

/// Decide what to notify about after an account went from `old` to `new`.
///
/// Transient errors never notify. New mail is only announced on a transition
/// from zero or unknown to a positive count.
pub fn decide(account_name: &str, old: &AccountState, new: &AccountState) -> Vec<Notification> {
    let mut notifications = Vec::new();

    if let Some(error) = &new.last_error
        && new.has_unexpected_error()
    {
        notifications.push(Notification::Error {
            account: account_name.to_owned(),
            timestamp: error.timestamp,
            message: error.message.clone(),
        });
    }

    let had_no_mail = matches!(old.unread_count, None | Some(0));
    let has_mail = new.unread_count.is_some_and(|count| count > 0);
    if new.last_error.is_none() && has_mail && had_no_mail {
        notifications.push(Notification::NewMail {
            account: account_name.to_owned(),
        });
    }

    notifications
}
