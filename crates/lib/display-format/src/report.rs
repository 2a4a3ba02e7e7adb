//! The on-demand full report.

use std::fmt::Write as _;

use account_registry::Entry;

/// Title of the full report.
pub const REPORT_TITLE: &str = "Mail Status";

/// Render the multi-line status of every account.
pub fn full_report(entries: &[Entry]) -> String {
    let mut report = format!("{REPORT_TITLE}:");

    for Entry { name, state } in entries {
        let count = state
            .unread_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| "?".to_owned());
        let _ = write!(report, "\n{name}: {count}");

        if let Some(last_success) = &state.last_success {
            let _ = write!(
                report,
                "\n  Last successful check at {}",
                crate::timestamp(last_success)
            );
        }

        if let Some(error) = &state.last_error {
            let _ = write!(
                report,
                "\n  {} error at {}: {}",
                error.kind,
                crate::timestamp(&error.timestamp),
                error.message
            );
        }
    }

    report
}
