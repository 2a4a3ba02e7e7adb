//! The single consumer.

use account_registry::{AccountRegistry, ApplyError, Snapshot};
use display_format::Formatter;
use error_classifier::panic_message;

use crate::{Inbox, Message, Surface};

/// Errors of processing a single message.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError<E: std::error::Error + 'static> {
    /// The result could not be applied.
    #[error("apply check result: {0}")]
    Apply(#[source] ApplyError),

    /// The surface rejected an update.
    #[error("display: {0}")]
    Surface(#[source] E),

    /// Processing panicked.
    #[error("internal error: {0}")]
    Panic(String),
}

/// Owns the registry and applies messages one at a time.
pub struct Synchronizer<S> {
    registry: AccountRegistry,
    formatter: Formatter,
    surface: S,
    snapshots: tokio::sync::watch::Sender<Snapshot>,
}

impl<S: std::fmt::Debug> std::fmt::Debug for Synchronizer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synchronizer")
            .field("registry", &self.registry)
            .field("formatter", &self.formatter)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Synchronizer<S> {
    /// Create a new consumer.
    pub fn new(registry: AccountRegistry, formatter: Formatter, surface: S) -> Self {
        let (snapshots, _) = tokio::sync::watch::channel(registry.snapshot());
        Self {
            registry,
            formatter,
            surface,
            snapshots,
        }
    }

    /// Watch the registry snapshots published after every change.
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// The registry.
    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render the indicator from the current registry state.
    pub fn redraw(&mut self) -> Result<(), S::Error> {
        let indicator = self.formatter.indicator(self.registry.entries());
        self.surface
            .update_indicator(&indicator.label, &indicator.tooltip)
    }

    /// Process one message.
    ///
    /// Failures and panics are reported to the surface as notifications.
    pub fn handle(&mut self, message: Message) {
        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.process(message)));

        let error = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(error)) => error,
            Err(panic) => ProcessError::Panic(panic_message(panic.as_ref())),
        };
        self.report(&error);
    }

    /// Consume the inbox until it is drained or `shutdown` fires.
    pub async fn run(
        mut self,
        mut inbox: Inbox,
        shutdown: tokio_util::sync::CancellationToken,
    ) -> Self {
        if let Err(error) = self.redraw() {
            self.report(&ProcessError::Surface(error));
        }

        loop {
            let message = tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    tracing::info!(message = "state synchronizer shutting down");
                    break;
                }
                message = inbox.recv() => message,
            };

            let Some(message) = message else {
                tracing::debug!(message = "all submitters are gone");
                break;
            };
            self.handle(message);
        }

        self
    }

    fn process(&mut self, message: Message) -> Result<(), ProcessError<S::Error>> {
        match message {
            Message::CheckResult(result) => {
                let account_name = result.account_name.clone();
                let transition = self
                    .registry
                    .apply_result(result)
                    .map_err(ProcessError::Apply)?;
                self.snapshots.send_replace(self.registry.snapshot());

                // Every notification and the redraw are attempted; the first
                // failure is returned.
                let mut outcome = Ok(());
                for notification in
                    notification_gate::decide(&account_name, &transition.old, &transition.new)
                {
                    tracing::info!(account = %account_name, ?notification, "notifying");
                    let shown = self
                        .surface
                        .show_notification(notification.title(), &notification.message());
                    outcome = outcome.and(shown);
                }
                let redrawn = self.redraw();

                outcome.and(redrawn).map_err(ProcessError::Surface)
            }
            Message::ShowStatus => {
                let text = display_format::full_report(self.registry.entries());
                self.surface
                    .show_full_report(display_format::REPORT_TITLE, &text)
                    .map_err(ProcessError::Surface)
            }
        }
    }

    fn report(&mut self, error: &ProcessError<S::Error>) {
        tracing::warn!(%error, "failed to process a message");

        let message = format!(
            "Error updating mail status at {}: {error}",
            display_format::timestamp(&chrono::Local::now())
        );
        if let Err(surface_error) = self
            .surface
            .show_notification(notification_gate::ERROR_TITLE, &message)
        {
            tracing::error!(%error, %surface_error, "failed to report an error");
        }
    }
}
