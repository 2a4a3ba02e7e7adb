//! Headless mailcount: prints the indicator, notifications and reports.

use std::io::Write as _;

use tokio::io::AsyncBufReadExt as _;

/// Run the CLI.
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let config = config_load::with_default_env_var().await?.value;
    let settings = config_bringup::settings(&config)?;
    let accounts = config_bringup::imap_accounts(&settings)?;
    drop(config);

    let engine = engine::spawn(engine::Params {
        accounts,
        classifier: settings.classifier,
        formatter: settings.formatter,
        check_interval: settings.check_interval,
        surface: Console,
    });

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                break;
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    continue;
                };
                match line.trim() {
                    "c" | "check" => engine.check_now(),
                    "s" | "status" => engine.show_status()?,
                    "q" | "quit" => break,
                    "" => {}
                    other => eprintln!("unknown command {other:?}, expected check, status or quit"),
                }
            }
        }
    }

    engine.shutdown().await;

    Ok(())
}

/// Writes everything to stdout.
#[derive(Debug)]
struct Console;

impl state_sync::Surface for Console {
    type Error = std::io::Error;

    fn update_indicator(&mut self, label: &str, tooltip: &str) -> Result<(), Self::Error> {
        writeln!(std::io::stdout().lock(), "[{label}] {tooltip}")
    }

    fn show_notification(&mut self, title: &str, message: &str) -> Result<(), Self::Error> {
        writeln!(std::io::stdout().lock(), "{title}: {message}")
    }

    fn show_full_report(&mut self, _title: &str, text: &str) -> Result<(), Self::Error> {
        writeln!(std::io::stdout().lock(), "{text}")
    }
}
