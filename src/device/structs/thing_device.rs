use crate::device::structs::slot_info::SlotInfo;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThingDevice {
    pub thing_name: String,
    pub manufacturer: String,
    pub model: String,
    pub report_interval: Duration,
    pub slots: Vec<SlotInfo>,
}
