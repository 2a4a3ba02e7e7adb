//! Lift raw config into engine settings.

mod error;
mod types;

pub use error::*;
pub use types::*;

use std::collections::HashSet;
use std::time::Duration;

/// Default minutes between two periodic checks.
const DEFAULT_CHECK_INTERVAL_MINUTES: u64 = 30;

/// Resolve the raw config, applying defaults and validating it.
pub fn settings(config: &config_core::Config) -> Result<Settings, ConfigError> {
    let check_interval_minutes = config
        .check_interval_minutes
        .unwrap_or(DEFAULT_CHECK_INTERVAL_MINUTES);
    if check_interval_minutes == 0 {
        return Err(ConfigError::ZeroInterval);
    }
    let Some(check_interval_secs) = check_interval_minutes.checked_mul(60) else {
        return Err(ConfigError::IntervalTooLong {
            minutes: check_interval_minutes,
        });
    };

    if config.accounts.is_empty() {
        return Err(ConfigError::NoAccounts);
    }

    let defaults = display_format::Formatter::default();
    let formatter = display_format::Formatter {
        prefix: config.display_prefix.clone().unwrap_or(defaults.prefix),
        suffix: config.display_suffix.clone().unwrap_or(defaults.suffix),
    };

    let classifier = match &config.transient_errors {
        Some(causes) => error_classifier::ErrorClassifier::new(causes.iter().copied()),
        None => error_classifier::ErrorClassifier::default(),
    };

    let default_timeouts = imap_counter::Timeouts::default();
    let timeouts = imap_counter::Timeouts {
        connect: config
            .connect_timeout_secs
            .map_or(default_timeouts.connect, Duration::from_secs),
        receive: config
            .receive_timeout_secs
            .map_or(default_timeouts.receive, Duration::from_secs),
    };

    let mut seen = HashSet::new();
    let mut accounts = Vec::with_capacity(config.accounts.len());
    for account in &config.accounts {
        if !seen.insert(account.name.as_str()) {
            return Err(ConfigError::DuplicateAccount {
                name: account.name.clone(),
            });
        }
        let account = account_settings(account).map_err(|source| ConfigError::Account {
            name: account.name.clone(),
            source,
        })?;
        accounts.push(account);
    }

    Ok(Settings {
        check_interval: Duration::from_secs(check_interval_secs),
        formatter,
        classifier,
        timeouts,
        accounts,
    })
}

/// Resolve a single account.
fn account_settings(account: &config_core::AccountConfig) -> Result<AccountSettings, AccountError> {
    if account.folders.is_empty() {
        return Err(AccountError::NoFolders);
    }

    let endpoint = imap_counter::Endpoint::parse(&account.url).map_err(AccountError::Url)?;

    Ok(AccountSettings {
        name: account.name.clone(),
        endpoint,
        username: account.username.clone(),
        password: imap_counter::Password::new(account.password.clone()),
        folders: account.folders.clone(),
    })
}

/// Create the IMAP client of every account.
pub fn imap_accounts(
    settings: &Settings,
) -> Result<Vec<poller::Account<imap_counter::ImapCounter>>, imap_counter::TlsConnectError> {
    settings
        .accounts
        .iter()
        .map(|account| {
            tracing::debug!(
                account = %account.name,
                imap_host = %account.endpoint.host,
                imap_port = account.endpoint.port,
                "preparing account"
            );

            let counter = imap_counter::ImapCounter::new(imap_counter::Params {
                endpoint: account.endpoint.clone(),
                username: account.username.clone(),
                password: account.password.clone(),
                timeouts: settings.timeouts,
            })?;

            Ok(poller::Account {
                name: account.name.clone(),
                folders: account.folders.clone(),
                counter,
            })
        })
        .collect()
}
