pub mod shadow_document;
pub mod shadow_update_message;
pub mod shadow_update_type;
pub mod thing_device;
