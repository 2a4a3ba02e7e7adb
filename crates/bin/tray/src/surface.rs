//! The tray display surface.

/// Errors of the tray surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The event loop has exited.
    #[error("tray event loop is gone")]
    EventLoopClosed,

    /// The desktop notification could not be shown.
    #[error("desktop notification: {0}")]
    Notify(#[source] notify_rust::error::Error),
}

/// Sends indicator updates to the event loop and raises desktop
/// notifications for everything else.
pub struct TraySurface {
    proxy: tao::event_loop::EventLoopProxy<crate::UserEvent>,
}

impl TraySurface {
    /// Create a surface feeding the given event loop.
    pub fn new(proxy: tao::event_loop::EventLoopProxy<crate::UserEvent>) -> Self {
        Self { proxy }
    }

    fn notify(title: &str, body: &str) -> Result<(), SurfaceError> {
        off_runtime(|| {
            notify_rust::Notification::new()
                .appname("mailcount")
                .summary(title)
                .body(body)
                .show()
        })
        .map_err(SurfaceError::Notify)?;
        Ok(())
    }
}

/// Run blocking `work` without stalling the other tasks of the runtime's
/// worker.
///
/// Requires the multi-threaded runtime.
fn off_runtime<T>(work: impl FnOnce() -> T) -> T {
    tokio::task::block_in_place(work)
}

impl state_sync::Surface for TraySurface {
    type Error = SurfaceError;

    fn update_indicator(&mut self, label: &str, tooltip: &str) -> Result<(), Self::Error> {
        self.proxy
            .send_event(crate::UserEvent::Indicator {
                label: label.to_owned(),
                tooltip: tooltip.to_owned(),
            })
            .map_err(|_| SurfaceError::EventLoopClosed)
    }

    fn show_notification(&mut self, title: &str, message: &str) -> Result<(), Self::Error> {
        Self::notify(title, message)
    }

    fn show_full_report(&mut self, title: &str, text: &str) -> Result<(), Self::Error> {
        Self::notify(title, text)
    }
}
