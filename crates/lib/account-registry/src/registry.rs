//! The registry and its single mutation entry point.

use std::collections::HashMap;

use error_classifier::ErrorClassifier;

use crate::{AccountState, CheckResult, Entry, ErrorInfo, Snapshot};

/// Errors returned while applying a check result.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// The result names an account the registry does not know.
    #[error("unknown account \"{name}\"")]
    UnknownAccount {
        /// The name from the result.
        name: String,
    },
}

/// The state of an account before and after applying a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State before the result was applied.
    pub old: AccountState,

    /// State after the result was applied.
    pub new: AccountState,
}

/// Owns the state of every configured account.
///
/// Meant to be owned by a single consumer; readers get [`Snapshot`]s.
#[derive(Debug)]
pub struct AccountRegistry {
    /// Classifier for failed results.
    classifier: ErrorClassifier,

    /// Accounts in configuration order.
    entries: Vec<Entry>,

    /// Account name to position in `entries`.
    index: HashMap<String, usize>,
}

impl AccountRegistry {
    /// Create a registry with a fresh state for every given account.
    ///
    /// Repeated names are registered once, at their first position.
    pub fn new<I, N>(classifier: ErrorClassifier, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for name in names {
            let name = name.into();
            if index.contains_key(&name) {
                continue;
            }
            index.insert(name.clone(), entries.len());
            entries.push(Entry {
                name,
                state: AccountState::default(),
            });
        }

        Self {
            classifier,
            entries,
            index,
        }
    }

    /// Copy the current state of all accounts.
    pub fn snapshot(&self) -> Snapshot {
        self.entries.clone()
    }

    /// Borrow the current state of all accounts.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The state of one account.
    pub fn get(&self, name: &str) -> Option<&AccountState> {
        self.index.get(name).map(|&position| &self.entries[position].state)
    }

    /// The classifier used for failed results.
    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    /// Apply a check result, returning the old and the new state of the account.
    ///
    /// A failure keeps the last known count and success time.
    pub fn apply_result(&mut self, result: CheckResult) -> Result<Transition, ApplyError> {
        let CheckResult {
            account_name,
            timestamp,
            outcome,
        } = result;

        let Some(&position) = self.index.get(&account_name) else {
            return Err(ApplyError::UnknownAccount { name: account_name });
        };

        let state = &mut self.entries[position].state;
        let old = state.clone();

        state.last_attempt = Some(timestamp);
        match outcome {
            Ok(unread_count) => {
                state.last_success = Some(timestamp);
                state.unread_count = Some(unread_count);
                state.last_error = None;
            }
            Err(error) => {
                state.last_error = Some(ErrorInfo {
                    kind: self.classifier.classify(&error),
                    cause: error.cause,
                    message: error.message,
                    timestamp,
                });
            }
        }

        Ok(Transition {
            old,
            new: state.clone(),
        })
    }
}
