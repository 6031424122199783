use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EndpointConfig {
    pub host: String,
    pub port: u16,
    /// Milliseconds.
    pub connect_timeout: u64,
}
