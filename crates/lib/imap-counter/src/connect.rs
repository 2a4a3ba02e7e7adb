//! Connection and login.

use std::time::Duration;

use crate::{Endpoint, Error, Stage, TlsMode};

/// Await `future`, giving up after `timeout`.
pub(crate) async fn within<F>(
    timeout: Duration,
    stage: Stage,
    future: F,
) -> Result<F::Output, Error>
where
    F: std::future::Future,
{
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| Error::ReceiveTimeout { stage, timeout })
}

/// Resolve the host and open a TCP connection to it.
async fn tcp_connect(
    endpoint: &Endpoint,
    connect_timeout: Duration,
) -> Result<tokio::net::TcpStream, Error> {
    let host = endpoint.host.as_str();

    let addrs: Vec<std::net::SocketAddr> = tokio::net::lookup_host((host, endpoint.port))
        .await
        .map_err(|source| Error::Resolve {
            host: host.to_owned(),
            source,
        })?
        .collect();
    if addrs.is_empty() {
        return Err(Error::NoAddresses {
            host: host.to_owned(),
        });
    }

    tokio::time::timeout(connect_timeout, tokio::net::TcpStream::connect(addrs.as_slice()))
        .await
        .map_err(|_| Error::ConnectTimeout {
            host: host.to_owned(),
            timeout: connect_timeout,
        })?
        .map_err(|source| Error::Connect {
            host: host.to_owned(),
            source,
        })
}

/// Wait for the untagged server greeting.
async fn read_greeting<S>(
    client: &mut async_imap::Client<S>,
    receive_timeout: Duration,
) -> Result<(), Error>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    within(receive_timeout, Stage::Greeting, client.read_response())
        .await?
        .map_err(Error::Greeting)?
        .ok_or(Error::MissingGreeting)?;
    Ok(())
}

/// Connect to the server and log in.
pub(crate) async fn establish(
    endpoint: &Endpoint,
    connector: &tokio_rustls::TlsConnector,
    username: &str,
    password: &crate::Password,
    timeouts: &crate::Timeouts,
) -> Result<crate::Session, Error> {
    tracing::debug!(
        imap_host = %endpoint.host,
        imap_port = endpoint.port,
        imap_tls_mode = ?endpoint.tls_mode,
        "connecting to the IMAP server"
    );

    let tcp_stream = tcp_connect(endpoint, timeouts.connect).await?;

    let client = match endpoint.tls_mode {
        TlsMode::Implicit => {
            let stream = within(
                timeouts.receive,
                Stage::TlsHandshake,
                crate::tls::handshake(connector, &endpoint.host, tcp_stream),
            )
            .await?
            .map_err(Error::Tls)?;
            let mut client = async_imap::Client::new(stream);
            read_greeting(&mut client, timeouts.receive).await?;
            client
        }
        TlsMode::StartTls => {
            let mut client = async_imap::Client::new(tcp_stream);
            read_greeting(&mut client, timeouts.receive).await?;
            within(
                timeouts.receive,
                Stage::StartTls,
                client.run_command_and_check_ok("STARTTLS", None),
            )
            .await?
            .map_err(Error::StartTls)?;
            let tcp_stream = client.into_inner();
            let stream = within(
                timeouts.receive,
                Stage::TlsHandshake,
                crate::tls::handshake(connector, &endpoint.host, tcp_stream),
            )
            .await?
            .map_err(Error::Tls)?;
            async_imap::Client::new(stream)
        }
    };

    let session = within(
        timeouts.receive,
        Stage::Login,
        client.login(username, password.expose()),
    )
    .await?
    .map_err(|(error, _client)| Error::Login(error))?;

    Ok(session)
}
