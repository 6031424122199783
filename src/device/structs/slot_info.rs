use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotInfo {
    /// Power bank id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<String>,
    /// Slot position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<i32>,
    /// Battery percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vp: Option<i32>,
    /// Channel type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct: Option<i32>,
    /// Channel version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv: Option<i32>,
}
