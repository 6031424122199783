use crate::config::structs::device_config::DeviceConfig;

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            thing_name: String::from("TestSimpleIot"),
            manufacturer: String::from("Laidian"),
            model: String::from("RC-10"),
            report_interval: 5_000,
        }
    }
}
