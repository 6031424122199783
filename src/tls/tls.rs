use crate::credentials::structs::credential_bundle::CredentialBundle;
use crate::tls::enums::tls_error::TlsError;
use crate::tls::structs::handshake_summary::HandshakeSummary;
use crate::tls::structs::key_store_cert_resolver::KeyStoreCertResolver;
use log::{
    debug,
    info
};
use rustls::pki_types::ServerName;
use rustls::{
    ClientConfig,
    ClientConnection,
    RootCertStore
};
use std::fs::File;
use std::io::BufReader;
use std::net::{
    TcpStream,
    ToSocketAddrs
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Port on which AWS IoT Core requires ALPN for MQTT.
pub const AWS_IOT_ALPN_PORT: u16 = 443;

/// ALPN protocol for MQTT with X.509 client authentication on port 443.
pub const AWS_IOT_MQTT_ALPN: &[u8] = b"x-amzn-mqtt-ca";

/// Loads the trust anchors for the endpoint: every certificate in `ca_path`,
/// or the webpki root bundle when no file is configured.
pub fn load_root_store(ca_path: Option<&Path>) -> Result<RootCertStore, TlsError> {
    let mut roots = RootCertStore::empty();
    match ca_path {
        Some(path) => {
            let file = File::open(path)?;
            let mut reader = BufReader::new(file);
            for cert in rustls_pemfile::certs(&mut reader) {
                roots.add(cert?)?;
            }
            if roots.is_empty() {
                return Err(TlsError::NoRootCertificates(path.display().to_string()));
            }
            debug!("[TLS] Loaded {} root certificate(s) from {}", roots.len(), path.display());
        }
        None => {
            roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            debug!("[TLS] Using {} bundled webpki root certificate(s)", roots.len());
        }
    }
    Ok(roots)
}

pub fn create_client_config(
    bundle: &CredentialBundle,
    roots: RootCertStore,
    port: u16,
) -> Result<ClientConfig, TlsError> {
    let resolver = KeyStoreCertResolver::new(bundle)?;
    let mut config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_client_cert_resolver(Arc::new(resolver));
    if port == AWS_IOT_ALPN_PORT {
        config.alpn_protocols = vec![AWS_IOT_MQTT_ALPN.to_vec()];
    }
    Ok(config)
}

/// Connects to `host:port` and completes a TLS handshake with `config`.
///
/// Only the handshake is performed; the session is closed with
/// `close_notify` right after.
#[tracing::instrument(level = "debug", skip(config))]
pub fn handshake(
    config: ClientConfig,
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<HandshakeSummary, TlsError> {
    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| TlsError::InvalidServerName(format!("{}: {}", host, e)))?;
    let address = (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| TlsError::AddressResolution(format!("{}:{}", host, port)))?;

    info!("[TLS] Connecting to {} ({})", host, address);
    let mut socket = TcpStream::connect_timeout(&address, timeout)?;
    socket.set_read_timeout(Some(timeout))?;
    socket.set_write_timeout(Some(timeout))?;

    let mut connection = ClientConnection::new(Arc::new(config), server_name)?;
    while connection.is_handshaking() {
        connection.complete_io(&mut socket)?;
    }

    let summary = HandshakeSummary {
        host: host.to_string(),
        port,
        protocol_version: connection.protocol_version().map(|v| format!("{:?}", v)),
        cipher_suite: connection
            .negotiated_cipher_suite()
            .map(|suite| format!("{:?}", suite.suite())),
        alpn_protocol: connection
            .alpn_protocol()
            .map(|protocol| String::from_utf8_lossy(protocol).into_owned()),
    };
    info!("[TLS] Handshake completed: {}", summary);

    connection.send_close_notify();
    if let Err(error) = connection.complete_io(&mut socket) {
        debug!("[TLS] Ignoring error while sending close_notify: {}", error);
    }
    Ok(summary)
}
