//! The display surface the consumer drives.

/// Where the indicator, notifications and reports end up.
///
/// Only ever called from the consumer.
pub trait Surface: Send + 'static {
    /// Error returned by the surface.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Replace the indicator label and tooltip.
    fn update_indicator(&mut self, label: &str, tooltip: &str) -> Result<(), Self::Error>;

    /// Raise a notification.
    fn show_notification(&mut self, title: &str, message: &str) -> Result<(), Self::Error>;

    /// Show the full status report.
    fn show_full_report(&mut self, title: &str, text: &str) -> Result<(), Self::Error>;
}

