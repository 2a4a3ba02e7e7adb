//! Shared configuration types for mailcount.

/// Root configuration.
///
/// Unset optional values take their defaults at bringup.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Minutes between two periodic checks.
    pub check_interval_minutes: Option<u64>,

    /// Text in front of the label entries.
    pub display_prefix: Option<String>,

    /// Text after the label entries.
    pub display_suffix: Option<String>,

    /// Error causes that never raise a notification.
    pub transient_errors: Option<Vec<error_classifier::ErrorCause>>,

    /// TCP connect timeout (seconds).
    pub connect_timeout_secs: Option<u64>,

    /// Timeout for every server answer (seconds).
    pub receive_timeout_secs: Option<u64>,

    /// Mail accounts, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accounts: Vec<AccountConfig>,
}

/// A mail account.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, PartialEq, Eq)]
pub struct AccountConfig {
    /// Unique name shown in the indicator.
    pub name: String,

    /// Server URL, `imaps://host[:port]` or `imap://host[:port]`.
    pub url: String,

    /// Login user name.
    pub username: String,

    /// Login password.
    pub password: String,

    /// Folders whose unread counts are summed.
    pub folders: Vec<String>,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("folders", &self.folders)
            .finish()
    }
}
