/// Reported properties of a `ThingDevice`.
pub mod device_properties;

/// Shadow document envelope.
pub mod shadow_document;

/// Message received on a shadow update topic.
pub mod shadow_update_message;

/// Power bank slot state.
pub mod slot_info;

/// The application device.
pub mod thing_device;
