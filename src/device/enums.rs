/// Shadow update topic kinds.
pub mod shadow_update_type;
