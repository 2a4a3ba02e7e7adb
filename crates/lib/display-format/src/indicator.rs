//! Label and tooltip.

use account_registry::Entry;

/// Default text in front of the label entries.
pub const DEFAULT_PREFIX: &str = "M:";

/// Default text after the label entries.
pub const DEFAULT_SUFFIX: &str = " ";

/// Texts of the always-visible indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Compact text listing only the accounts that need attention.
    pub label: String,

    /// Status of every account.
    pub tooltip: String,
}

/// Renders snapshots into indicator texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    /// Label prefix.
    pub prefix: String,

    /// Label suffix.
    pub suffix: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            suffix: DEFAULT_SUFFIX.to_owned(),
        }
    }
}

impl Formatter {
    /// Create a formatter with the given label prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Render both indicator texts.
    pub fn indicator(&self, entries: &[Entry]) -> Indicator {
        Indicator {
            label: self.label(entries),
            tooltip: tooltip(entries),
        }
    }

    /// Render the label.
    ///
    /// Accounts with a positive count show `name:count`, accounts whose latest
    /// check failed unexpectedly show `name:count?` (count possibly blank),
    /// everything else is left out.
    pub fn label(&self, entries: &[Entry]) -> String {
        let mut label = self.prefix.clone();

        for Entry { name, state } in entries {
            if state.has_unexpected_error() {
                let item = format!("{name}:{}?", crate::count_or_blank(state));
                crate::push_separated(&mut label, &item);
            } else if let Some(count) = state.unread_count
                && count > 0
            {
                crate::push_separated(&mut label, &format!("{name}:{count}"));
            }
        }

        label.push_str(&self.suffix);
        label
    }
}

/// Render the tooltip: `name:count` for every account, with `?` appended
/// when its latest check failed for any reason.
pub fn tooltip(entries: &[Entry]) -> String {
    let mut tooltip = String::new();

    for Entry { name, state } in entries {
        let mark = if state.has_error() { "?" } else { "" };
        let item = format!("{name}:{}{mark}", crate::count_or_blank(state));
        crate::push_separated(&mut tooltip, &item);
    }

    tooltip
}
