use crate::device::enums::shadow_update_type::ShadowUpdateType;

impl ShadowUpdateType {
    pub fn path(&self) -> &'static str {
        match self {
            ShadowUpdateType::Accepted => "accepted",
            ShadowUpdateType::Delta => "delta",
        }
    }

    pub fn topic(&self, thing_name: &str) -> String {
        format!("$aws/things/{}/shadow/update/{}", thing_name, self.path())
    }

    pub fn from_topic(topic: &str) -> Option<ShadowUpdateType> {
        let (prefix, path) = topic.rsplit_once('/')?;
        if !prefix.starts_with("$aws/things/") || !prefix.ends_with("/shadow/update") {
            return None;
        }
        match path {
            "accepted" => Some(ShadowUpdateType::Accepted),
            "delta" => Some(ShadowUpdateType::Delta),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShadowUpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
