//! Mail count engine.
//!
//! Wires the poller to the single consumer that owns the account registry
//! and exposes the triggers a frontend needs.

use std::time::Duration;

use account_registry::{AccountRegistry, Snapshot};
use display_format::Formatter;
use error_classifier::ErrorClassifier;
use mail_counter_core::UnreadCounter;
use poller::{Account, Poller};
use state_sync::{Closed, Submitter, Surface, Synchronizer};

/// Parameters for [`spawn`].
#[derive(Debug)]
pub struct Params<C, S> {
    /// Accounts to check, in display order.
    pub accounts: Vec<Account<C>>,

    /// Decides which errors are worth a notification.
    pub classifier: ErrorClassifier,

    /// Renders the label.
    pub formatter: Formatter,

    /// Time between two periodic cycles.
    pub check_interval: Duration,

    /// Where the indicator, notifications and reports go.
    pub surface: S,
}

/// A running engine.
#[derive(Debug)]
pub struct Engine<C> {
    poller: Poller<C>,
    submitter: Submitter,
    snapshots: tokio::sync::watch::Receiver<Snapshot>,
    shutdown: tokio_util::sync::CancellationToken,
    runtime: tokio::runtime::Handle,
    periodic: tokio::task::JoinHandle<()>,
    consumer: tokio::task::JoinHandle<()>,
}

/// Start the consumer and the periodic check loop.
///
/// Must be called from within a tokio runtime; the returned handle can be
/// used from any thread.
pub fn spawn<C, S>(params: Params<C, S>) -> Engine<C>
where
    C: UnreadCounter,
    S: Surface,
{
    let Params {
        accounts,
        classifier,
        formatter,
        check_interval,
        surface,
    } = params;

    let runtime = tokio::runtime::Handle::current();
    let shutdown = tokio_util::sync::CancellationToken::new();
    let (submitter, inbox) = state_sync::channel();

    let registry = AccountRegistry::new(
        classifier,
        accounts.iter().map(|account| account.name.clone()),
    );
    let synchronizer = Synchronizer::new(registry, formatter, surface);
    let snapshots = synchronizer.subscribe();

    let poller = Poller::new(accounts, submitter.clone(), shutdown.clone());

    tracing::info!(
        accounts = ?poller.account_names().collect::<Vec<_>>(),
        ?check_interval,
        "starting mail checks"
    );

    let consumer = runtime.spawn({
        let shutdown = shutdown.clone();
        async move {
            synchronizer.run(inbox, shutdown).await;
        }
    });
    let periodic = runtime.spawn(poller.clone().run_periodic(check_interval));

    Engine {
        poller,
        submitter,
        snapshots,
        shutdown,
        runtime,
        periodic,
        consumer,
    }
}

impl<C: UnreadCounter> Engine<C> {
    /// Run a check cycle now, next to the periodic loop.
    pub fn check_now(&self) {
        tracing::info!(message = "check requested");
        let poller = self.poller.clone();
        self.runtime.spawn(async move { poller.run_cycle().await });
    }

    /// Queue a full report for the surface.
    pub fn show_status(&self) -> Result<(), Closed> {
        self.submitter.request_status()
    }

    /// Watch the registry snapshots.
    pub fn snapshots(&self) -> tokio::sync::watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Request shutdown without waiting for it.
    pub fn cancel(&self) {
        self.shutdown.cancel();
    }

    /// Shut down and wait for the periodic loop and the consumer to stop.
    pub async fn shutdown(self) {
        tracing::info!(message = "shutting down");
        self.shutdown.cancel();

        if let Err(error) = self.periodic.await {
            tracing::error!(%error, "periodic checks failed");
        }
        if let Err(error) = self.consumer.await {
            tracing::error!(%error, "state synchronizer failed");
        }
    }
}
