use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceConfig {
    pub thing_name: String,
    pub manufacturer: String,
    pub model: String,
    /// Milliseconds between shadow reports.
    pub report_interval: u64,
}
