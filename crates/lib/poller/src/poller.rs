//! Check cycles over every account.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use account_registry::CheckResult;
use error_classifier::{CheckError, panic_message};
use mail_counter_core::UnreadCounter;
use state_sync::Submitter;

use crate::{Account, check_account};

/// Default time between two periodic cycles.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Runs check cycles and submits their results.
///
/// Clones share the accounts, so a clone can run an on-demand cycle while
/// another runs the periodic loop.
pub struct Poller<C> {
    accounts: Arc<[Arc<Account<C>>]>,
    submitter: Submitter,
    shutdown: tokio_util::sync::CancellationToken,
}

impl<C> Clone for Poller<C> {
    fn clone(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
            submitter: self.submitter.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Poller<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("accounts", &self.accounts)
            .field("shutdown", &self.shutdown)
            .finish_non_exhaustive()
    }
}

impl<C: UnreadCounter> Poller<C> {
    /// Create a new poller.
    ///
    /// In-flight checks are abandoned once `shutdown` is cancelled.
    pub fn new(
        accounts: impl IntoIterator<Item = Account<C>>,
        submitter: Submitter,
        shutdown: tokio_util::sync::CancellationToken,
    ) -> Self {
        Self {
            accounts: accounts.into_iter().map(Arc::new).collect(),
            submitter,
            shutdown,
        }
    }

    /// Names of the polled accounts, in order.
    pub fn account_names(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|account| account.name.as_str())
    }

    /// Check every account once, concurrently.
    ///
    /// Each result is submitted as soon as its account is done.
    pub async fn run_cycle(&self) {
        let mut join_set = tokio::task::JoinSet::new();
        let mut names = HashMap::new();

        for account in self.accounts.iter() {
            let account = Arc::clone(account);
            let submitter = self.submitter.clone();
            let shutdown = self.shutdown.clone();
            let name = account.name.clone();

            let handle = join_set.spawn(async move {
                let result = tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => {
                        tracing::info!(account = %account.name, "abandoning in-flight check");
                        return;
                    }
                    result = check_account(&account) => result,
                };
                submit(&submitter, result);
            });
            names.insert(handle.id(), name);
        }

        while let Some(joined) = join_set.join_next_with_id().await {
            let error = match joined {
                Ok(_) => continue,
                Err(error) => error,
            };
            let Some(name) = names.remove(&error.id()) else {
                continue;
            };
            if !error.is_panic() {
                tracing::debug!(account = %name, %error, "check task cancelled");
                continue;
            }

            let message = panic_message(error.into_panic().as_ref());
            tracing::error!(account = %name, %message, "check panicked");
            let error = CheckError::internal(format!("check panicked: {message}"));
            submit(
                &self.submitter,
                CheckResult::failure(name, chrono::Local::now(), error),
            );
        }
    }

    /// Run a cycle, sleep `interval`, repeat until shutdown.
    pub async fn run_periodic(self, interval: Duration) {
        while !self.shutdown.is_cancelled() {
            self.run_cycle().await;

            tracing::debug!(?interval, "sleeping until the next check");
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }
        tracing::info!(message = "periodic checks stopped");
    }
}

fn submit(submitter: &Submitter, result: CheckResult) {
    if let Err(error) = submitter.submit(result) {
        tracing::debug!(%error, "dropping check result");
    }
}
