use crate::config::structs::credentials_config::CredentialsConfig;
use crate::config::structs::device_config::DeviceConfig;
use crate::config::structs::endpoint_config::EndpointConfig;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub credentials: CredentialsConfig,
    pub device: DeviceConfig,
    pub endpoint: EndpointConfig,
}
