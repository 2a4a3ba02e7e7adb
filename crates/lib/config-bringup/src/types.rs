//! Resolved settings.

use std::time::Duration;

/// Fully resolved settings for the engine.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Time between two periodic checks.
    pub check_interval: Duration,

    /// Label prefix and suffix.
    pub formatter: display_format::Formatter,

    /// The transient error set.
    pub classifier: error_classifier::ErrorClassifier,

    /// Network timeouts of every check.
    pub timeouts: imap_counter::Timeouts,

    /// Accounts in configuration order.
    pub accounts: Vec<AccountSettings>,
}

/// A fully resolved account.
#[derive(Debug, Clone)]
pub struct AccountSettings {
    /// Unique account name.
    pub name: String,

    /// Where the server is.
    pub endpoint: imap_counter::Endpoint,

    /// Login user name.
    pub username: String,

    /// Login password.
    pub password: imap_counter::Password,

    /// Folders to sum.
    pub folders: Vec<String>,
}
