//! Error types.

/// Config bringup error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config has no accounts.
    #[error("no accounts configured")]
    NoAccounts,

    /// The check interval is zero.
    #[error("check interval must be at least one minute")]
    ZeroInterval,

    /// The check interval does not fit in a duration.
    #[error("check interval of {minutes} minutes is too long")]
    IntervalTooLong {
        /// The configured interval in minutes.
        minutes: u64,
    },

    /// Two accounts share a name.
    #[error("account \"{name}\" is configured more than once")]
    DuplicateAccount {
        /// The repeated name.
        name: String,
    },

    /// An account is invalid.
    #[error("account \"{name}\": {source}")]
    Account {
        /// The account name.
        name: String,

        /// What is wrong with it.
        #[source]
        source: AccountError,
    },
}

/// Account bringup error.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// No folders to check.
    #[error("no folders configured")]
    NoFolders,

    /// The server URL is unusable.
    #[error("url: {0}")]
    Url(#[source] imap_counter::EndpointError),
}
