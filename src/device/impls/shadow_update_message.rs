use crate::device::enums::shadow_update_type::ShadowUpdateType;
use crate::device::structs::shadow_update_message::ShadowUpdateMessage;
use serde::de::DeserializeOwned;

impl ShadowUpdateMessage {
    pub fn new(update_type: ShadowUpdateType, thing_name: &str, payload: Vec<u8>) -> Self {
        Self {
            update_type,
            topic: update_type.topic(thing_name),
            payload,
        }
    }

    /// Classifies a message received on `topic`; `None` for non-update topics.
    pub fn from_topic(topic: &str, payload: Vec<u8>) -> Option<Self> {
        let update_type = ShadowUpdateType::from_topic(topic)?;
        Some(Self {
            update_type,
            topic: topic.to_string(),
            payload,
        })
    }

    pub fn payload_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}
