//! [`mail_counter_core::UnreadCounter`] backed by an IMAP server.

use std::time::Duration;

use crate::{Endpoint, Error, Password, Stage};

/// Network timeouts of a single check.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Timeouts {
    /// How long to wait for the TCP connection.
    pub connect: Duration,

    /// How long to wait for each server answer.
    pub receive: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(30),
            receive: Duration::from_secs(60),
        }
    }
}

/// Parameters for [`ImapCounter::new`].
#[derive(Debug, Clone)]
pub struct Params {
    /// Where the server is.
    pub endpoint: Endpoint,

    /// The login user name.
    pub username: String,

    /// The login password.
    pub password: Password,

    /// Network timeouts.
    pub timeouts: Timeouts,
}

/// Counts unread messages of one mail account.
///
/// Every query opens its own connection and logs out afterwards.
#[derive(Clone)]
pub struct ImapCounter {
    endpoint: Endpoint,
    username: String,
    password: Password,
    timeouts: Timeouts,
    connector: tokio_rustls::TlsConnector,
}

impl std::fmt::Debug for ImapCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImapCounter")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("timeouts", &self.timeouts)
            .finish_non_exhaustive()
    }
}

impl ImapCounter {
    /// Create a new counter trusting the system root certificates.
    pub fn new(params: Params) -> Result<Self, crate::TlsConnectError> {
        let Params {
            endpoint,
            username,
            password,
            timeouts,
        } = params;

        Ok(Self {
            endpoint,
            username,
            password,
            timeouts,
            connector: crate::connector()?,
        })
    }

    /// The server this counter talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    async fn count(&self, folder: &str) -> Result<u32, Error> {
        let mut session = crate::connect::establish(
            &self.endpoint,
            &self.connector,
            &self.username,
            &self.password,
            &self.timeouts,
        )
        .await?;

        let unread = crate::connect::within(
            self.timeouts.receive,
            Stage::Status,
            crate::fetch_unread(&mut session, folder),
        )
        .await?
        .map_err(|source| Error::Status {
            folder: folder.to_owned(),
            source,
        })?;

        tracing::debug!(imap_folder = %folder, unread, "got unread count");

        match crate::connect::within(self.timeouts.receive, Stage::Status, session.logout()).await
        {
            Ok(Ok(())) => {}
            Ok(Err(error)) => tracing::debug!(message = "logout failed", ?error),
            Err(error) => tracing::debug!(message = "logout timed out", ?error),
        }

        Ok(unread)
    }
}

impl mail_counter_core::UnreadCounter for ImapCounter {
    type Error = Error;

    fn unread_count<'a>(
        &'a self,
        folder: &'a str,
    ) -> impl Future<Output = Result<u32, Self::Error>> + Send + 'a {
        self.count(folder)
    }
}
