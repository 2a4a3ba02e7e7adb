//! IMAP connectivity helpers.

use std::time::Duration;

use tokio::net::TcpStream;

/// How often to try logging in while the server starts.
const ATTEMPTS: u8 = 60;

/// Log in over plaintext IMAP, retrying until the server is ready.
pub async fn login_with_retry(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
) -> Result<async_imap::Session<TcpStream>, std::io::Error> {
    let try_login = || async move {
        let stream = TcpStream::connect((host, port)).await?;
        let mut client = async_imap::Client::new(stream);

        if client.read_response().await?.is_none() {
            return Err(std::io::Error::other("missing IMAP greeting"));
        }

        client
            .login(user, password)
            .await
            .map_err(|(error, _)| std::io::Error::other(error))
    };

    let mut attempts_left = ATTEMPTS;
    loop {
        let error = match try_login().await {
            Ok(session) => return Ok(session),
            Err(error) => error,
        };

        attempts_left = match attempts_left.checked_sub(1) {
            Some(0) | None => return Err(error),
            Some(left) => left,
        };
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}

/// Append a message to `folder`, flagged as seen or not.
pub async fn append_message(
    session: &mut async_imap::Session<TcpStream>,
    folder: &str,
    subject: &str,
    seen: bool,
) -> Result<(), async_imap::error::Error> {
    let message = format!("Subject: {subject}\r\n\r\nHello from tests.\r\n");
    let flags = seen.then_some("(\\Seen)");
    session
        .append(folder, flags, None, message.as_bytes())
        .await?;
    session.noop().await?;
    Ok(())
}
