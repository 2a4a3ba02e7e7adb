//! Server address parsed from the account URL.

/// How to secure the IMAP connection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TlsMode {
    /// Implicit TLS (usually port 993).
    Implicit,

    /// Start with plaintext and upgrade using STARTTLS (usually port 143).
    StartTls,
}

impl TlsMode {
    /// The port used when the URL does not name one.
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Implicit => 993,
            Self::StartTls => 143,
        }
    }
}

/// Where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Hostname or IP address of the IMAP server.
    pub host: String,

    /// IMAP port.
    pub port: u16,

    /// TLS mode.
    pub tls_mode: TlsMode,
}

/// Errors returned while parsing an account URL.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// Not a URL at all.
    #[error("invalid URL: {0}")]
    Parse(#[source] url::ParseError),

    /// The scheme is neither `imaps` nor `imap`.
    #[error("unsupported URL scheme \"{scheme}\", expected \"imaps\" or \"imap\"")]
    UnsupportedScheme {
        /// The scheme found in the URL.
        scheme: String,
    },

    /// The URL has no host.
    #[error("URL has no host")]
    MissingHost,
}

impl Endpoint {
    /// Parse `imaps://host[:port]` (implicit TLS) or `imap://host[:port]` (STARTTLS).
    pub fn parse(input: &str) -> Result<Self, EndpointError> {
        let url = url::Url::parse(input).map_err(EndpointError::Parse)?;

        let tls_mode = match url.scheme() {
            "imaps" => TlsMode::Implicit,
            "imap" => TlsMode::StartTls,
            scheme => {
                return Err(EndpointError::UnsupportedScheme {
                    scheme: scheme.to_owned(),
                });
            }
        };

        let host = match url.host() {
            Some(url::Host::Domain(domain)) if !domain.is_empty() => domain.to_owned(),
            Some(url::Host::Ipv4(addr)) => addr.to_string(),
            Some(url::Host::Ipv6(addr)) => addr.to_string(),
            _ => return Err(EndpointError::MissingHost),
        };

        Ok(Self {
            host,
            port: url.port().unwrap_or(tls_mode.default_port()),
            tls_mode,
        })
    }
}

impl core::str::FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imaps_defaults_to_993() {
        let endpoint = Endpoint::parse("imaps://imap.example.com").unwrap();

        assert_eq!(
            endpoint,
            Endpoint {
                host: "imap.example.com".to_owned(),
                port: 993,
                tls_mode: TlsMode::Implicit,
            }
        );
    }

    #[test]
    fn imap_means_starttls() {
        let endpoint = Endpoint::parse("imap://mail.example.org:1143/").unwrap();

        assert_eq!(endpoint.host, "mail.example.org");
        assert_eq!(endpoint.port, 1143);
        assert_eq!(endpoint.tls_mode, TlsMode::StartTls);
    }

    #[test]
    fn ipv6_host_has_no_brackets() {
        let endpoint = Endpoint::parse("imaps://[::1]:10993").unwrap();

        assert_eq!(endpoint.host, "::1");
        assert_eq!(endpoint.port, 10993);
    }

    #[test]
    fn other_schemes_are_rejected() {
        let error = Endpoint::parse("https://mail.example.com/ews/Exchange.asmx").unwrap_err();

        assert!(
            matches!(error, EndpointError::UnsupportedScheme { ref scheme } if scheme == "https")
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            Endpoint::parse("not a url"),
            Err(EndpointError::Parse(_))
        ));
    }
}
