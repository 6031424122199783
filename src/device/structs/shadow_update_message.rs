use crate::device::enums::shadow_update_type::ShadowUpdateType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowUpdateMessage {
    pub update_type: ShadowUpdateType,
    pub topic: String,
    pub payload: Vec<u8>,
}
