//! IMAP check errors and their causes.

use std::time::Duration;

use error_classifier::{ErrorCause, HasCause};

/// A step of the exchange with the server that reads its answer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Stage {
    /// TLS handshake.
    TlsHandshake,

    /// Server greeting.
    Greeting,

    /// STARTTLS upgrade.
    StartTls,

    /// Authentication.
    Login,

    /// Folder STATUS query.
    Status,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::TlsHandshake => "TLS handshake",
            Self::Greeting => "greeting",
            Self::StartTls => "STARTTLS",
            Self::Login => "login",
            Self::Status => "STATUS",
        })
    }
}

/// Errors returned while counting unread messages of a folder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host name could not be resolved.
    #[error("resolve {host}: {source}")]
    Resolve {
        /// The host name.
        host: String,

        /// Underlying resolver error.
        #[source]
        source: std::io::Error,
    },

    /// The host name resolved to nothing.
    #[error("resolve {host}: no addresses")]
    NoAddresses {
        /// The host name.
        host: String,
    },

    /// The TCP connection was not established in time.
    #[error("connect to {host}: no connection within {timeout:?}")]
    ConnectTimeout {
        /// The host name.
        host: String,

        /// The connect timeout.
        timeout: Duration,
    },

    /// The TCP connection failed.
    #[error("connect to {host}: {source}")]
    Connect {
        /// The host name.
        host: String,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server did not answer in time.
    #[error("{stage}: no answer within {timeout:?}")]
    ReceiveTimeout {
        /// The step that timed out.
        stage: Stage,

        /// The receive timeout.
        timeout: Duration,
    },

    /// TLS error.
    #[error("TLS: {0}")]
    Tls(#[source] crate::TlsConnectError),

    /// Reading the greeting failed.
    #[error("greeting: {0}")]
    Greeting(#[source] std::io::Error),

    /// The server closed the connection instead of greeting.
    #[error("IMAP server sent no greeting")]
    MissingGreeting,

    /// The STARTTLS command failed.
    #[error("STARTTLS: {0}")]
    StartTls(#[source] async_imap::error::Error),

    /// The server rejected the login.
    #[error("login: {0}")]
    Login(#[source] async_imap::error::Error),

    /// The STATUS query failed.
    #[error("status of \"{folder}\": {source}")]
    Status {
        /// The queried folder.
        folder: String,

        /// Underlying IMAP error.
        #[source]
        source: async_imap::error::Error,
    },
}

/// The cause of a raw I/O error.
fn io_cause(error: &std::io::Error) -> ErrorCause {
    use std::io::ErrorKind;

    match error.kind() {
        ErrorKind::TimedOut | ErrorKind::WouldBlock => ErrorCause::ReceiveTimeout,
        ErrorKind::ConnectionRefused => ErrorCause::ConnectionRefused,
        ErrorKind::InvalidData => ErrorCause::Tls,
        _ => ErrorCause::ConnectionLost,
    }
}

/// The cause of an IMAP protocol error.
fn imap_cause(error: &async_imap::error::Error) -> ErrorCause {
    match error {
        async_imap::error::Error::Io(error) => io_cause(error),
        async_imap::error::Error::ConnectionLost => ErrorCause::ConnectionLost,
        _ => ErrorCause::Protocol,
    }
}

impl HasCause for crate::TlsConnectError {
    fn error_cause(&self) -> ErrorCause {
        match self {
            Self::Io(error) if error.kind() != std::io::ErrorKind::InvalidData => io_cause(error),
            _ => ErrorCause::Tls,
        }
    }
}

impl HasCause for Error {
    fn error_cause(&self) -> ErrorCause {
        match self {
            Self::Resolve { .. } | Self::NoAddresses { .. } => ErrorCause::NameResolution,
            Self::ConnectTimeout { .. } => ErrorCause::ConnectTimeout,
            Self::Connect { source, .. } => match source.kind() {
                std::io::ErrorKind::TimedOut => ErrorCause::ConnectTimeout,
                _ => io_cause(source),
            },
            Self::ReceiveTimeout { .. } => ErrorCause::ReceiveTimeout,
            Self::Tls(error) => error.error_cause(),
            Self::Greeting(error) => io_cause(error),
            Self::MissingGreeting => ErrorCause::Protocol,
            Self::StartTls(error) | Self::Status { source: error, .. } => imap_cause(error),
            Self::Login(async_imap::error::Error::Io(error)) => io_cause(error),
            Self::Login(_) => ErrorCause::Authentication,
        }
    }
}
