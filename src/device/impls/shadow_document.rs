use crate::device::structs::shadow_document::{
    ShadowDocument,
    ShadowState
};

impl<T> ShadowDocument<T> {
    pub fn reported(reported: T) -> Self {
        Self {
            state: ShadowState { reported },
        }
    }
}
