//! End-to-end tests of the engine with a fake mail server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use display_format::Formatter;
use error_classifier::{ErrorCause, ErrorClassifier, HasCause};
use poller::Account;

#[derive(Debug, thiserror::Error)]
#[error("server said no")]
struct FakeError(ErrorCause);

impl HasCause for FakeError {
    fn error_cause(&self) -> ErrorCause {
        self.0
    }
}

/// Answers the current count of a mailbox, changeable between checks.
#[derive(Debug, Clone)]
struct Mailbox(Arc<Mutex<Result<u32, ErrorCause>>>);

impl Mailbox {
    fn empty() -> Self {
        Self(Arc::new(Mutex::new(Ok(0))))
    }

    fn set(&self, answer: Result<u32, ErrorCause>) {
        *self.0.lock().unwrap() = answer;
    }
}

impl mail_counter_core::UnreadCounter for Mailbox {
    type Error = FakeError;

    fn unread_count<'a>(
        &'a self,
        _folder: &'a str,
    ) -> impl Future<Output = Result<u32, Self::Error>> + Send + 'a {
        let answer = *self.0.lock().unwrap();
        async move { answer.map_err(FakeError) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Indicator(String, String),
    Notification(String, String),
    Report(String, String),
}

#[derive(Debug, thiserror::Error)]
#[error("closed")]
struct Gone;

#[derive(Debug)]
struct Recorder(tokio::sync::mpsc::UnboundedSender<Event>);

impl state_sync::Surface for Recorder {
    type Error = Gone;

    fn update_indicator(&mut self, label: &str, tooltip: &str) -> Result<(), Self::Error> {
        self.0
            .send(Event::Indicator(label.to_owned(), tooltip.to_owned()))
            .map_err(|_| Gone)
    }

    fn show_notification(&mut self, title: &str, message: &str) -> Result<(), Self::Error> {
        self.0
            .send(Event::Notification(title.to_owned(), message.to_owned()))
            .map_err(|_| Gone)
    }

    fn show_full_report(&mut self, title: &str, text: &str) -> Result<(), Self::Error> {
        self.0
            .send(Event::Report(title.to_owned(), text.to_owned()))
            .map_err(|_| Gone)
    }
}

#[tokio::test]
async fn new_mail_and_failure_reach_the_surface() {
    let a = Mailbox::empty();
    let b = Mailbox::empty();
    let (events_tx, mut events) = tokio::sync::mpsc::unbounded_channel();

    let engine = engine::spawn(engine::Params {
        accounts: vec![
            Account {
                name: "A".to_owned(),
                folders: vec!["INBOX".to_owned()],
                counter: a.clone(),
            },
            Account {
                name: "B".to_owned(),
                folders: vec!["INBOX".to_owned(), "Lists".to_owned()],
                counter: b.clone(),
            },
        ],
        classifier: ErrorClassifier::default(),
        formatter: Formatter::default(),
        check_interval: Duration::from_secs(30 * 60),
        surface: Recorder(events_tx),
    });

    let mut snapshots = engine.snapshots();
    snapshots
        .wait_for(|snapshot| {
            snapshot
                .iter()
                .all(|entry| entry.state.unread_count == Some(0))
        })
        .await
        .unwrap();

    a.set(Ok(2));
    b.set(Err(ErrorCause::Protocol));
    engine.check_now();
    snapshots
        .wait_for(|snapshot| {
            snapshot[0].state.unread_count == Some(2) && snapshot[1].state.has_error()
        })
        .await
        .unwrap();
    engine.show_status().unwrap();

    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        let done = matches!(event, Event::Report(..));
        seen.push(event);
        if done {
            break;
        }
    }
    engine.shutdown().await;

    assert_eq!(
        seen[0],
        Event::Indicator("M: ".to_owned(), "A: B:".to_owned())
    );

    let notifications: Vec<_> = seen
        .iter()
        .filter_map(|event| match event {
            Event::Notification(title, message) => Some((title.as_str(), message.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(notifications.len(), 2);
    assert!(notifications.contains(&("Mail Notice", "New mail at A")));
    assert!(notifications.iter().any(|(title, message)| {
        *title == "Mail Error"
            && message.starts_with("Error checking B mail at ")
            && message.ends_with(": server said no")
    }));

    let last_indicator = seen.iter().rev().find_map(|event| match event {
        Event::Indicator(label, tooltip) => Some((label.as_str(), tooltip.as_str())),
        _ => None,
    });
    assert_eq!(last_indicator, Some(("M: A:2 B:0? ", "A:2 B:0?")));

    let Some(Event::Report(title, text)) = seen.last() else {
        panic!("expected the report last");
    };
    assert_eq!(title, "Mail Status");
    assert!(text.contains("\nB: 0\n"));
    assert!(text.contains("Unexpected error at "));
}

#[tokio::test(start_paused = true)]
async fn periodic_checks_pick_up_changes() {
    let mailbox = Mailbox::empty();
    let (events_tx, _events) = tokio::sync::mpsc::unbounded_channel();

    let engine = engine::spawn(engine::Params {
        accounts: vec![Account {
            name: "Work".to_owned(),
            folders: vec!["INBOX".to_owned()],
            counter: mailbox.clone(),
        }],
        classifier: ErrorClassifier::default(),
        formatter: Formatter::new("Mail", ""),
        check_interval: Duration::from_secs(60),
        surface: Recorder(events_tx),
    });

    let mut snapshots = engine.snapshots();
    snapshots
        .wait_for(|snapshot| snapshot[0].state.unread_count == Some(0))
        .await
        .unwrap();

    mailbox.set(Err(ErrorCause::ConnectTimeout));
    snapshots
        .wait_for(|snapshot| snapshot[0].state.has_error())
        .await
        .unwrap();
    assert_eq!(snapshots.borrow()[0].state.unread_count, Some(0));

    mailbox.set(Ok(9));
    snapshots
        .wait_for(|snapshot| snapshot[0].state.unread_count == Some(9))
        .await
        .unwrap();

    engine.shutdown().await;
}
