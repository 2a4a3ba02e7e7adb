//! Tests for resolving the raw config.

use std::time::Duration;

use config_bringup::{AccountError, ConfigError};
use config_core::{AccountConfig, Config};
use error_classifier::{ErrorCause, ErrorKind};

fn account(name: &str) -> AccountConfig {
    AccountConfig {
        name: name.to_owned(),
        url: "imaps://imap.example.com".to_owned(),
        username: "user".to_owned(),
        password: "secret".to_owned(),
        folders: vec!["INBOX".to_owned()],
    }
}

fn config(accounts: Vec<AccountConfig>) -> Config {
    Config {
        accounts,
        ..Default::default()
    }
}

#[test]
fn defaults_are_applied() {
    let settings = config_bringup::settings(&config(vec![account("Work")])).unwrap();

    assert_eq!(settings.check_interval, Duration::from_secs(30 * 60));
    assert_eq!(settings.formatter.prefix, "M:");
    assert_eq!(settings.formatter.suffix, " ");
    assert_eq!(settings.timeouts, imap_counter::Timeouts::default());
    assert_eq!(
        settings.classifier.classify_cause(ErrorCause::ConnectTimeout),
        ErrorKind::Transient
    );
    assert_eq!(
        settings.classifier.classify_cause(ErrorCause::Authentication),
        ErrorKind::Unexpected
    );

    let work = &settings.accounts[0];
    assert_eq!(work.endpoint.host, "imap.example.com");
    assert_eq!(work.endpoint.port, 993);
    assert_eq!(work.password.expose(), "secret");
}

#[test]
fn explicit_values_win() {
    let settings = config_bringup::settings(&Config {
        check_interval_minutes: Some(5),
        display_prefix: Some("Mail".to_owned()),
        display_suffix: Some(String::new()),
        transient_errors: Some(vec![ErrorCause::ConnectionRefused]),
        connect_timeout_secs: Some(3),
        receive_timeout_secs: Some(4),
        accounts: vec![account("Work")],
    })
    .unwrap();

    assert_eq!(settings.check_interval, Duration::from_secs(300));
    assert_eq!(settings.formatter.prefix, "Mail");
    assert_eq!(settings.formatter.suffix, "");
    assert_eq!(settings.timeouts.connect, Duration::from_secs(3));
    assert_eq!(settings.timeouts.receive, Duration::from_secs(4));
    assert_eq!(
        settings.classifier.classify_cause(ErrorCause::ConnectionRefused),
        ErrorKind::Transient
    );
    assert_eq!(
        settings.classifier.classify_cause(ErrorCause::ConnectTimeout),
        ErrorKind::Unexpected
    );
}

#[test]
fn rejects_empty_account_list() {
    let error = config_bringup::settings(&config(vec![])).unwrap_err();

    assert!(matches!(error, ConfigError::NoAccounts));
}

#[test]
fn rejects_zero_interval() {
    let error = config_bringup::settings(&Config {
        check_interval_minutes: Some(0),
        ..config(vec![account("Work")])
    })
    .unwrap_err();

    assert!(matches!(error, ConfigError::ZeroInterval));
}

#[test]
fn rejects_interval_overflowing_seconds() {
    let error = config_bringup::settings(&Config {
        check_interval_minutes: Some(u64::MAX / 2),
        ..config(vec![account("Work")])
    })
    .unwrap_err();

    assert!(matches!(
        error,
        ConfigError::IntervalTooLong { minutes } if minutes == u64::MAX / 2
    ));
}

#[test]
fn rejects_duplicate_names() {
    let error =
        config_bringup::settings(&config(vec![account("Work"), account("Work")])).unwrap_err();

    assert!(matches!(error, ConfigError::DuplicateAccount { ref name } if name == "Work"));
}

#[test]
fn rejects_account_without_folders() {
    let error = config_bringup::settings(&config(vec![AccountConfig {
        folders: vec![],
        ..account("Work")
    }]))
    .unwrap_err();

    assert!(matches!(
        error,
        ConfigError::Account {
            source: AccountError::NoFolders,
            ..
        }
    ));
    assert_eq!(error.to_string(), "account \"Work\": no folders configured");
}

#[test]
fn rejects_unsupported_url() {
    let error = config_bringup::settings(&config(vec![AccountConfig {
        url: "pop3://mail.example.com".to_owned(),
        ..account("Work")
    }]))
    .unwrap_err();

    assert!(matches!(
        error,
        ConfigError::Account {
            source: AccountError::Url(_),
            ..
        }
    ));
}
