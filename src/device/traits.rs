/// Capability of producing a shadow report.
pub mod reportable_device;
