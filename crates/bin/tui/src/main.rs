//! Terminal UI for mailcount.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

mod terminal;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = config_load::with_default_env_var().await?.value;
    let settings = config_bringup::settings(&config)?;
    let accounts = config_bringup::imap_accounts(&settings)?;
    drop(config);

    let (ui_sender, mut ui_receiver) = tokio::sync::mpsc::unbounded_channel();

    let engine = engine::spawn(engine::Params {
        accounts,
        classifier: settings.classifier,
        formatter: settings.formatter,
        check_interval: settings.check_interval,
        surface: ChannelSurface(ui_sender),
    });

    tracing::info!(message = "Entering UI...");

    let terminal_guard = terminal::TerminalGuard::enter()?;
    let backend = ratatui::backend::CrosstermBackend::new(std::io::stdout());
    let mut terminal = ratatui::Terminal::new(backend)?;
    terminal.clear()?;

    let (input_sender, mut input_receiver) = tokio::sync::mpsc::channel(32);
    tokio::task::spawn_blocking(move || {
        while let Ok(event) = crossterm::event::read() {
            if input_sender.blocking_send(event).is_err() {
                break;
            }
        }
    });

    let mut view = tui_view::View::default();
    tui_view::render(&mut terminal, &view)?;

    loop {
        tokio::select! {
            Some(input_event) = input_receiver.recv() => {
                match input_event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('c') => engine.check_now(),
                        KeyCode::Char('s') => engine.show_status()?,
                        _ => {}
                    },
                    Event::Resize(_, _) => tui_view::render(&mut terminal, &view)?,
                    _ => {}
                }
            }
            Some(update) = ui_receiver.recv() => {
                match update {
                    UiUpdate::Indicator { label, tooltip } => {
                        view.label = label;
                        view.tooltip = tooltip;
                    }
                    UiUpdate::Notification { title, message } => {
                        view.push_notification(&title, &message);
                    }
                    UiUpdate::Report(text) => view.report = Some(text),
                }
                tui_view::render(&mut terminal, &view)?;
            }
            result = tokio::signal::ctrl_c() => {
                result?;
                break;
            }
            else => break,
        }
    }

    drop(terminal_guard);

    tracing::info!(message = "Exiting...");
    engine.shutdown().await;

    Ok(())
}

/// An update for the UI loop.
#[derive(Debug)]
enum UiUpdate {
    /// New label and tooltip.
    Indicator {
        /// The label.
        label: String,

        /// The tooltip.
        tooltip: String,
    },

    /// A notification.
    Notification {
        /// The notification title.
        title: String,

        /// The notification body.
        message: String,
    },

    /// A full report.
    Report(String),
}

/// The UI loop has exited.
#[derive(Debug, thiserror::Error)]
#[error("terminal UI is gone")]
struct UiGone;

/// Forwards everything to the UI loop.
#[derive(Debug)]
struct ChannelSurface(tokio::sync::mpsc::UnboundedSender<UiUpdate>);

impl ChannelSurface {
    fn send(&self, update: UiUpdate) -> Result<(), UiGone> {
        self.0.send(update).map_err(|_| UiGone)
    }
}

impl state_sync::Surface for ChannelSurface {
    type Error = UiGone;

    fn update_indicator(&mut self, label: &str, tooltip: &str) -> Result<(), Self::Error> {
        self.send(UiUpdate::Indicator {
            label: label.to_owned(),
            tooltip: tooltip.to_owned(),
        })
    }

    fn show_notification(&mut self, title: &str, message: &str) -> Result<(), Self::Error> {
        self.send(UiUpdate::Notification {
            title: title.to_owned(),
            message: message.to_owned(),
        })
    }

    fn show_full_report(&mut self, _title: &str, text: &str) -> Result<(), Self::Error> {
        self.send(UiUpdate::Report(text.to_owned()))
    }
}
