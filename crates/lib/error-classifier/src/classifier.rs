//! Transient/unexpected classification.

use std::collections::BTreeSet;

use crate::{ErrorCause, HasCause};

/// The causes expected while offline or on a flaky network.
pub const DEFAULT_TRANSIENT: [ErrorCause; 3] = [
    ErrorCause::ConnectTimeout,
    ErrorCause::NameResolution,
    ErrorCause::ReceiveTimeout,
];

/// How an error should be treated.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Expected noise; only degrades the tooltip.
    Transient,

    /// Everything else; degrades the label and raises a notification.
    Unexpected,
}

impl ErrorKind {
    /// Capitalized name for reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transient => "Transient",
            Self::Unexpected => "Unexpected",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps errors to an [`ErrorKind`] using a closed set of transient causes.
///
/// Built once at startup and handed to whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassifier {
    /// Causes considered transient.
    transient: BTreeSet<ErrorCause>,
}

impl ErrorClassifier {
    /// Create a classifier treating exactly the given causes as transient.
    pub fn new(transient: impl IntoIterator<Item = ErrorCause>) -> Self {
        Self {
            transient: transient.into_iter().collect(),
        }
    }

    /// Classify an error.
    pub fn classify<E>(&self, error: &E) -> ErrorKind
    where
        E: HasCause + ?Sized,
    {
        self.classify_cause(error.error_cause())
    }

    /// Classify a bare cause.
    pub fn classify_cause(&self, cause: ErrorCause) -> ErrorKind {
        if self.transient.contains(&cause) {
            ErrorKind::Transient
        } else {
            ErrorKind::Unexpected
        }
    }

    /// The causes treated as transient.
    pub fn transient_causes(&self) -> impl Iterator<Item = ErrorCause> + '_ {
        self.transient.iter().copied()
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSIENT)
    }
}
