pub mod key_password;
pub mod key_store;
pub mod key_store_entry;
