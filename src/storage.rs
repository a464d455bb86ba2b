//! Key/value storage port used to hand a generated card between views.
//!
//! The shell supplies the real store (browser storage, a file, ...);
//! `MemoryStore` keeps everything in-process for tests and the CLI.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::schema::Card;
use crate::validate::validate_str;
use crate::{Error, Result};

/// Key under which the current card is stored by default
pub const CURRENT_CARD_KEY: &str = "cardposter.current";

pub trait CardStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store backed by a Mutex-guarded map
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| Error::Storage(format!("store lock poisoned: {}", e)))
    }
}

impl CardStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Serialize `card` as JSON under `key`
pub fn save_card(store: &dyn CardStore, key: &str, card: &Card) -> Result<()> {
    let json = serde_json::to_string(card)?;
    store.set(key, &json)
}

/// Load the card under `key`, running stored text through validation.
pub fn load_card(store: &dyn CardStore, key: &str) -> Result<Option<Card>> {
    match store.get(key)? {
        None => Ok(None),
        Some(text) => match validate_str(&text) {
            Ok(card) => Ok(Some(card)),
            Err(e) => {
                log::warn!("stored card under '{}' failed validation: {}", key, e);
                Err(e.into())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BasicItem, CardBody};

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn saved_card_loads_back_equal() {
        let store = MemoryStore::new();
        let card = Card::new("Tips", CardBody::Basic { items: vec![BasicItem::new(7, "a", "b")] });
        save_card(&store, CURRENT_CARD_KEY, &card).unwrap();
        let loaded = load_card(&store, CURRENT_CARD_KEY).unwrap().unwrap();
        assert_eq!(loaded, card);
    }

    #[test]
    fn corrupted_entry_is_a_validation_error() {
        let store = MemoryStore::new();
        store.set(CURRENT_CARD_KEY, r#"{"type":"basic"}"#).unwrap();
        assert!(matches!(load_card(&store, CURRENT_CARD_KEY), Err(Error::Validation(_))));
    }
}
