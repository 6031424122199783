use crate::keystore::structs::key_store_entry::KeyStoreEntry;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct KeyStore {
    pub(crate) entries: RwLock<HashMap<String, Arc<KeyStoreEntry>>>,
}
