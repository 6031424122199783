use crate::tls::structs::handshake_summary::HandshakeSummary;

impl std::fmt::Display for HandshakeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} protocol={} cipher={} alpn={}",
            self.host,
            self.port,
            self.protocol_version.as_deref().unwrap_or("-"),
            self.cipher_suite.as_deref().unwrap_or("-"),
            self.alpn_protocol.as_deref().unwrap_or("-")
        )
    }
}
