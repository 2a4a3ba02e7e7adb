//! Rendering of the registry into the label, the tooltip and the full report.

mod indicator;
mod report;

pub use indicator::*;
pub use report::*;

/// Format used for timestamps in every text we produce.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp for humans.
pub fn timestamp(value: &account_registry::Timestamp) -> impl core::fmt::Display + '_ {
    value.format(TIMESTAMP_FORMAT)
}

/// The unread count, or nothing when it is unknown.
fn count_or_blank(state: &account_registry::AccountState) -> String {
    state
        .unread_count
        .map(|count| count.to_string())
        .unwrap_or_default()
}

/// Append `item` to `out`, separated by a space unless `out` is empty.
fn push_separated(out: &mut String, item: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(item);
}
