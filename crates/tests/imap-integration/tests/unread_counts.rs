//! Docker-backed IMAP integration tests.

use std::error::Error;

use error_classifier::{ErrorCause, HasCause as _};
use mail_counter_core::UnreadCounter as _;

const IMAP_USER: &str = "test";
const IMAP_PASSWORD: &str = "secret";

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn status_counts_only_unseen_messages() -> Result<(), Box<dyn Error + Send + Sync>> {
    imap_integration::require_integration_tests_enabled()?;

    let container = imap_integration::start_greenmail(IMAP_USER, IMAP_PASSWORD).await?;
    let host = container.get_host().await?.to_string();
    let port = container
        .get_host_port_ipv4(imap_integration::IMAP_PORT)
        .await?;

    let mut session =
        imap_integration::login_with_retry(&host, port, IMAP_USER, IMAP_PASSWORD).await?;

    let before = imap_counter::fetch_unread(&mut session, "INBOX").await?;

    imap_integration::append_message(&mut session, "INBOX", "Unread", false).await?;
    imap_integration::append_message(&mut session, "INBOX", "Already read", true).await?;

    let after = imap_counter::fetch_unread(&mut session, "INBOX").await?;
    assert_eq!(after, before + 1);

    let missing = imap_counter::fetch_unread(&mut session, "No Such Folder").await;
    assert!(missing.is_err());

    session.logout().await?;

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn untrusted_certificate_is_a_tls_error() -> Result<(), Box<dyn Error + Send + Sync>> {
    imap_integration::require_integration_tests_enabled()?;

    let container = imap_integration::start_greenmail(IMAP_USER, IMAP_PASSWORD).await?;
    let host = container.get_host().await?.to_string();
    let plain_port = container
        .get_host_port_ipv4(imap_integration::IMAP_PORT)
        .await?;
    let tls_port = container
        .get_host_port_ipv4(imap_integration::IMAPS_PORT)
        .await?;

    // Wait for the server to accept logins.
    imap_integration::login_with_retry(&host, plain_port, IMAP_USER, IMAP_PASSWORD)
        .await?
        .logout()
        .await?;

    let counter = imap_counter::ImapCounter::new(imap_counter::Params {
        endpoint: format!("imaps://{host}:{tls_port}").parse()?,
        username: IMAP_USER.to_owned(),
        password: imap_counter::Password::new(IMAP_PASSWORD),
        timeouts: imap_counter::Timeouts::default(),
    })?;

    let error = counter
        .unread_count("INBOX")
        .await
        .expect_err("GreenMail uses a self-signed certificate");
    assert_eq!(error.error_cause(), ErrorCause::Tls);

    Ok(())
}
