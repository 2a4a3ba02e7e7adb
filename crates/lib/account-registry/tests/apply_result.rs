//! Tests for applying check results to the registry.

use account_registry::{AccountRegistry, ApplyError, CheckResult, Timestamp};
use chrono::TimeZone as _;
use error_classifier::{CheckError, ErrorCause, ErrorClassifier, ErrorKind};

fn at(secs: i64) -> Timestamp {
    chrono::Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn registry() -> AccountRegistry {
    AccountRegistry::new(ErrorClassifier::default(), ["Work", "Home"])
}

#[test]
fn snapshot_keeps_configuration_order() {
    let registry = registry();

    let names: Vec<_> = registry
        .snapshot()
        .into_iter()
        .map(|entry| entry.name)
        .collect();

    assert_eq!(names, ["Work", "Home"]);
    assert!(registry.entries().iter().all(|entry| entry.state == Default::default()));
}

#[test]
fn success_sets_count_and_success_time() {
    let mut registry = registry();

    let transition = registry
        .apply_result(CheckResult::success("Work", at(10), 5))
        .unwrap();

    assert_eq!(transition.old, Default::default());
    assert_eq!(transition.new.unread_count, Some(5));
    assert_eq!(transition.new.last_success, Some(at(10)));
    assert_eq!(transition.new.last_attempt, Some(at(10)));
    assert_eq!(transition.new.last_error, None);
    assert_eq!(registry.get("Work"), Some(&transition.new));
    assert_eq!(registry.get("Home"), Some(&Default::default()));
}

#[test]
fn failure_preserves_last_known_count() {
    let mut registry = registry();
    registry
        .apply_result(CheckResult::success("Work", at(10), 3))
        .unwrap();

    let transition = registry
        .apply_result(CheckResult::failure(
            "Work",
            at(20),
            CheckError::new(ErrorCause::ConnectTimeout, "timed out"),
        ))
        .unwrap();

    let state = transition.new;
    assert_eq!(state.unread_count, Some(3));
    assert_eq!(state.last_success, Some(at(10)));
    assert_eq!(state.last_attempt, Some(at(20)));

    let error = state.last_error.expect("error should be recorded");
    assert_eq!(error.kind, ErrorKind::Transient);
    assert_eq!(error.cause, ErrorCause::ConnectTimeout);
    assert_eq!(error.message, "timed out");
    assert_eq!(error.timestamp, at(20));
}

#[test]
fn failure_before_any_success_leaves_count_unknown() {
    let mut registry = registry();

    let transition = registry
        .apply_result(CheckResult::failure(
            "Home",
            at(5),
            CheckError::new(ErrorCause::Authentication, "bad credentials"),
        ))
        .unwrap();

    assert_eq!(transition.new.unread_count, None);
    assert_eq!(transition.new.last_success, None);
    assert!(transition.new.has_unexpected_error());
}

#[test]
fn success_clears_previous_error() {
    let mut registry = registry();
    registry
        .apply_result(CheckResult::failure(
            "Work",
            at(1),
            CheckError::new(ErrorCause::Protocol, "garbage"),
        ))
        .unwrap();

    let transition = registry
        .apply_result(CheckResult::success("Work", at(2), 0))
        .unwrap();

    assert!(transition.old.has_error());
    assert!(!transition.new.has_error());
    assert_eq!(transition.new.unread_count, Some(0));
}

#[test]
fn last_applied_result_wins() {
    let mut registry = registry();

    registry
        .apply_result(CheckResult::success("Work", at(30), 7))
        .unwrap();
    registry
        .apply_result(CheckResult::success("Work", at(20), 2))
        .unwrap();

    let state = registry.get("Work").unwrap();
    assert_eq!(state.unread_count, Some(2));
    assert_eq!(state.last_success, Some(at(20)));
}

#[test]
fn unknown_account_is_rejected_without_changes() {
    let mut registry = registry();
    let before = registry.snapshot();

    let error = registry
        .apply_result(CheckResult::success("Nope", at(1), 1))
        .unwrap_err();

    assert!(matches!(error, ApplyError::UnknownAccount { ref name } if name == "Nope"));
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn classification_follows_the_registry_classifier() {
    let mut registry = AccountRegistry::new(ErrorClassifier::new([]), ["Work"]);

    let transition = registry
        .apply_result(CheckResult::failure(
            "Work",
            at(1),
            CheckError::new(ErrorCause::ConnectTimeout, "timed out"),
        ))
        .unwrap();

    assert!(transition.new.has_unexpected_error());
}
