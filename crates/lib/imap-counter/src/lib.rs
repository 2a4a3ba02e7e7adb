//! Unread counts over IMAP.

mod connect;
mod counter;
mod endpoint;
mod error;
mod password;
mod status;
mod tls;

pub use counter::*;
pub use endpoint::*;
pub use error::*;
pub use password::*;
pub use status::*;
pub use tls::*;

/// The stream every IMAP exchange ends up running over.
pub type Stream = tokio_rustls::client::TlsStream<tokio::net::TcpStream>;

/// An authenticated IMAP session.
pub type Session = async_imap::Session<Stream>;
