use crate::config::structs::device_config::DeviceConfig;
use crate::device::device::iso_8601_now;
use crate::device::structs::device_properties::DeviceProperties;
use crate::device::structs::slot_info::SlotInfo;
use crate::device::structs::thing_device::ThingDevice;
use crate::device::traits::reportable_device::ReportableDevice;
use log::info;
use std::time::Duration;

impl ThingDevice {
    pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_millis(5_000);

    pub fn new(thing_name: &str) -> Self {
        Self {
            thing_name: thing_name.to_string(),
            manufacturer: String::from(env!("CARGO_PKG_NAME")),
            model: String::from(std::env::consts::ARCH),
            report_interval: Self::DEFAULT_REPORT_INTERVAL,
            slots: Vec::new(),
        }
    }

    pub fn from_config(config: &DeviceConfig) -> Self {
        Self {
            thing_name: config.thing_name.clone(),
            manufacturer: config.manufacturer.clone(),
            model: config.model.clone(),
            report_interval: Duration::from_millis(config.report_interval),
            slots: Vec::new(),
        }
    }

    pub fn with_slots(mut self, slots: Vec<SlotInfo>) -> Self {
        self.slots = slots;
        self
    }
}

impl ReportableDevice for ThingDevice {
    type Snapshot = DeviceProperties;

    fn thing_name(&self) -> &str {
        &self.thing_name
    }

    fn report_interval(&self) -> Duration {
        self.report_interval
    }

    fn snapshot(&self) -> DeviceProperties {
        info!("[DEVICE] Preparing device report for {}", self.thing_name);
        DeviceProperties {
            id: self.thing_name.clone(),
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            last_update_at: iso_8601_now(),
            slots: self.slots.clone(),
        }
    }
}
