//! The error value carried by a failed check.

use std::sync::Arc;

use crate::{ErrorCause, HasCause};

/// Type-erased underlying error.
pub type Source = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// A failed check, as a plain value that can travel between tasks.
#[derive(Debug, Clone)]
pub struct CheckError {
    /// The cause used for classification.
    pub cause: ErrorCause,

    /// Human-readable description.
    pub message: String,

    /// The underlying error, when there is one.
    pub source: Option<Source>,
}

impl CheckError {
    /// Create an error without an underlying source.
    pub fn new(cause: ErrorCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
            source: None,
        }
    }

    /// Capture an error that knows its cause.
    pub fn from_source<E>(error: E) -> Self
    where
        E: std::error::Error + HasCause + Send + Sync + 'static,
    {
        Self {
            cause: error.error_cause(),
            message: error.to_string(),
            source: Some(Arc::new(error)),
        }
    }

    /// An error caused by a bug rather than by the outside world.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCause::Internal, message)
    }
}

/// The message of a caught panic payload.
pub fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

impl HasCause for CheckError {
    fn error_cause(&self) -> ErrorCause {
        self.cause
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}
