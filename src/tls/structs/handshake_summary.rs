use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandshakeSummary {
    pub host: String,
    pub port: u16,
    pub protocol_version: Option<String>,
    pub cipher_suite: Option<String>,
    pub alpn_protocol: Option<String>,
}
