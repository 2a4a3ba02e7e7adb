//! Tray indicator for mailcount.

use tray_icon::{TrayIcon, TrayIconBuilder, menu::MenuEvent};

mod icon;
mod menu;
mod surface;

use menu::Action;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<core::convert::Infallible> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let config = config_load::with_default_env_var().await?.value;
    let settings = config_bringup::settings(&config)?;
    let accounts = config_bringup::imap_accounts(&settings)?;
    drop(config);

    let event_loop = tao::event_loop::EventLoopBuilder::<UserEvent>::with_user_event().build();

    let engine = engine::spawn(engine::Params {
        accounts,
        classifier: settings.classifier,
        formatter: settings.formatter,
        check_interval: settings.check_interval,
        surface: surface::TraySurface::new(event_loop.create_proxy()),
    });

    tokio::spawn({
        let proxy = event_loop.create_proxy();
        async move {
            if let Err(error) = tokio::signal::ctrl_c().await {
                tracing::error!(%error, "failed to listen for Ctrl-C");
                return;
            }
            let _ = proxy.send_event(UserEvent::Quit);
        }
    });

    tracing::info!(message = "Starting tray...");

    let proxy = event_loop.create_proxy();
    tray_icon::menu::MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    let mut tray_icon: Option<TrayIcon> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = tao::event_loop::ControlFlow::Wait;

        match event {
            tao::event::Event::NewEvents(tao::event::StartCause::Init) => {
                match build_tray_icon() {
                    Ok(icon) => tray_icon = Some(icon),
                    Err(error) => {
                        tracing::error!(%error, "failed to create the tray icon");
                        engine.cancel();
                        *control_flow = tao::event_loop::ControlFlow::Exit;
                    }
                }
            }
            tao::event::Event::UserEvent(UserEvent::Indicator { label, tooltip }) => {
                if let Some(tray_icon) = &tray_icon {
                    tray_icon.set_title(Some(&label));
                    if let Err(error) = tray_icon.set_tooltip(Some(&tooltip)) {
                        tracing::warn!(%error, "failed to update the tooltip");
                    }
                }
            }
            tao::event::Event::UserEvent(UserEvent::Menu(event)) => {
                match Action::from_id(&event.id) {
                    Some(Action::CheckNow) => engine.check_now(),
                    Some(Action::ShowStatus) => {
                        if let Err(error) = engine.show_status() {
                            tracing::warn!(%error, "failed to request the status");
                        }
                    }
                    Some(Action::Quit) => {
                        engine.cancel();
                        *control_flow = tao::event_loop::ControlFlow::Exit;
                    }
                    None => tracing::debug!(menu_id = ?event.id, "unknown menu item"),
                }
            }
            tao::event::Event::UserEvent(UserEvent::Quit) => {
                tracing::info!(message = "Exiting...");
                engine.cancel();
                *control_flow = tao::event_loop::ControlFlow::Exit;
            }
            _ => {}
        }
    });
}

/// User events for the event loop.
#[derive(Debug)]
enum UserEvent {
    /// New label and tooltip.
    Indicator {
        /// Shown as the tray title.
        label: String,

        /// Shown on hover.
        tooltip: String,
    },

    /// Menu event.
    Menu(MenuEvent),

    /// Exit requested from outside the menu.
    Quit,
}

/// Create the tray icon with its menu.
fn build_tray_icon() -> color_eyre::eyre::Result<TrayIcon> {
    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu::build_menu()?))
        .with_icon(icon::envelope()?)
        .with_title("mailcount")
        .build()?;
    Ok(tray_icon)
}
