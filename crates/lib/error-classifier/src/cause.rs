//! The closed set of error causes.

/// What went wrong while checking an account.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ErrorCause {
    /// The TCP connection was not established in time.
    ConnectTimeout,

    /// The server host name could not be resolved.
    NameResolution,

    /// The server did not answer in time.
    ReceiveTimeout,

    /// The server refused the connection.
    ConnectionRefused,

    /// The connection broke in the middle of an exchange.
    ConnectionLost,

    /// TLS setup or handshake failure.
    Tls,

    /// The server rejected the credentials.
    Authentication,

    /// The server answered with something we did not expect.
    Protocol,

    /// A bug on our side, e.g. a panicking check.
    Internal,
}

impl ErrorCause {
    /// All the causes, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::ConnectTimeout,
        Self::NameResolution,
        Self::ReceiveTimeout,
        Self::ConnectionRefused,
        Self::ConnectionLost,
        Self::Tls,
        Self::Authentication,
        Self::Protocol,
        Self::Internal,
    ];

    /// A short stable name of the cause.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConnectTimeout => "connect timeout",
            Self::NameResolution => "name resolution",
            Self::ReceiveTimeout => "receive timeout",
            Self::ConnectionRefused => "connection refused",
            Self::ConnectionLost => "connection lost",
            Self::Tls => "tls",
            Self::Authentication => "authentication",
            Self::Protocol => "protocol",
            Self::Internal => "internal",
        }
    }
}

impl core::fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that know their [`ErrorCause`].
pub trait HasCause {
    /// The cause of this error.
    fn error_cause(&self) -> ErrorCause;
}
