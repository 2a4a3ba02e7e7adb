//! Terminal UI rendering.

use std::collections::VecDeque;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style, Stylize as _};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

/// How many notifications the log keeps.
pub const NOTIFICATION_LOG_LEN: usize = 50;

/// Everything the terminal shows.
#[derive(Debug, Clone, Default)]
pub struct View {
    /// The indicator label.
    pub label: String,

    /// The indicator tooltip.
    pub tooltip: String,

    /// The last full report, if one was requested.
    pub report: Option<String>,

    /// Notifications, newest first.
    pub notifications: VecDeque<String>,
}

impl View {
    /// Add a notification to the log, dropping the oldest ones.
    pub fn push_notification(&mut self, title: &str, message: &str) {
        self.notifications.push_front(format!("{title}: {message}"));
        self.notifications.truncate(NOTIFICATION_LOG_LEN);
    }
}

/// Render the main UI frame.
pub fn render<B>(terminal: &mut ratatui::Terminal<B>, view: &View) -> std::io::Result<()>
where
    B: ratatui::backend::Backend,
{
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(8),
            ])
            .split(frame.area());

        let header = Paragraph::new("mailcount: c check now, s show status, q quit")
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(header, chunks[0]);

        frame.render_widget(Paragraph::new(view.label.as_str()).bold(), chunks[1]);
        frame.render_widget(Paragraph::new(view.tooltip.as_str()).italic(), chunks[2]);

        let report = Paragraph::new(view.report.as_deref().unwrap_or("Press s to show status"))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(report, chunks[3]);

        let items: Vec<ListItem> = view
            .notifications
            .iter()
            .map(|notification| ListItem::new(notification.as_str()))
            .collect();
        let list =
            List::new(items).block(Block::default().borders(Borders::ALL).title("Notifications"));
        frame.render_widget(list, chunks[4]);
    })?;

    Ok(())
}
