//! rustls connector for IMAP connections.

/// Errors returned while preparing or establishing a TLS connection.
#[derive(Debug, thiserror::Error)]
pub enum TlsConnectError {
    /// No system root certificate could be loaded.
    #[error("failed to load system root certificates: {0}")]
    RootCerts(#[source] rustls_native_certs::Error),

    /// The host is not usable as a TLS server name.
    #[error("invalid DNS name: {0}")]
    InvalidDnsName(String),

    /// TLS handshake or I/O error.
    #[error("TLS I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a rustls connector trusting the system root certificates.
///
/// Unparsable certificates are skipped as long as at least one loads.
pub fn connector() -> Result<tokio_rustls::TlsConnector, TlsConnectError> {
    let rustls_native_certs::CertificateResult { certs, errors, .. } =
        rustls_native_certs::load_native_certs();

    if certs.is_empty()
        && let Some(error) = errors.into_iter().next()
    {
        return Err(TlsConnectError::RootCerts(error));
    }

    let mut root_store = rustls::RootCertStore::empty();
    let (added, ignored) = root_store.add_parsable_certificates(certs);
    tracing::debug!(added, ignored, "loaded system root certificates");

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(tokio_rustls::TlsConnector::from(std::sync::Arc::new(
        config,
    )))
}

/// Run the TLS handshake over an established TCP stream.
pub(crate) async fn handshake(
    connector: &tokio_rustls::TlsConnector,
    tls_server_name: &str,
    tcp_stream: tokio::net::TcpStream,
) -> Result<crate::Stream, TlsConnectError> {
    let server_name = rustls::pki_types::ServerName::try_from(tls_server_name.to_owned())
        .map_err(|_| TlsConnectError::InvalidDnsName(tls_server_name.to_owned()))?;
    let stream = connector.connect(server_name, tcp_stream).await?;
    Ok(stream)
}
