use crate::device::structs::slot_info::SlotInfo;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProperties {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub last_update_at: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<SlotInfo>,
}
