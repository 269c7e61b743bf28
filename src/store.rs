use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const KEY_ME: &str = "swipelite.me";
pub const KEY_LIKES: &str = "swipelite.likes";
pub const KEY_PASSES: &str = "swipelite.passes";
pub const KEY_MATCHES: &str = "swipelite.matches";

const ALL_KEYS: [&str; 4] = [KEY_ME, KEY_LIKES, KEY_PASSES, KEY_MATCHES];

/// Raw string key-value storage. The app backs this with `localStorage`;
/// tests back it with an in-memory map. `Send + Sync` because stores end up
/// inside Leptos context and callbacks, which carry those bounds.
pub trait KvBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` backend. Every operation degrades to a no-op or
/// an absent value when storage is unavailable (private browsing, no DOM).
struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KvBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Thin wrapper over durable key-value storage holding the four app
/// collections: self-profile record plus the likes/passes/matches id sets.
/// Sets are stored as JSON arrays and keep insertion order. Writes are
/// synchronous; corrupt or missing entries decode to empty defaults.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KvBackend>,
}

impl Store {
    pub fn local() -> Self {
        Self {
            backend: Arc::new(BrowserStorage),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            backend: Arc::new(tests::MemoryBackend::default()),
        }
    }

    /// Members of a stored id set, in insertion order. Missing or corrupt
    /// data decodes to an empty set.
    pub fn set_members(&self, key: &str) -> Vec<String> {
        self.backend
            .read(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Add a value to a stored set. Adding an existing member is a no-op.
    /// Returns the updated membership.
    pub fn add_to_set(&self, key: &str, value: &str) -> Vec<String> {
        let mut members = self.set_members(key);
        if !members.iter().any(|m| m == value) {
            members.push(value.to_string());
            if let Ok(raw) = serde_json::to_string(&members) {
                self.backend.write(key, &raw);
            }
        }
        members
    }

    pub fn get_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.backend
            .read(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn put_record<T: Serialize>(&self, key: &str, record: &T) {
        if let Ok(raw) = serde_json::to_string(record) {
            self.backend.write(key, &raw);
        }
    }

    /// Remove every recognized key. The caller is responsible for restarting
    /// the session afterwards.
    pub fn clear_all(&self) {
        for key in ALL_KEYS {
            self.backend.remove(key);
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryBackend {
        entries: Mutex<HashMap<String, String>>,
    }

    impl KvBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.lock().unwrap().remove(key);
        }
    }

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct TestRecord {
        name: String,
        age: u32,
    }

    #[test]
    fn missing_set_decodes_to_empty() {
        let store = Store::in_memory();
        assert!(store.set_members(KEY_LIKES).is_empty());
    }

    #[test]
    fn add_to_set_preserves_order_and_is_idempotent() {
        let store = Store::in_memory();
        store.add_to_set(KEY_LIKES, "2");
        store.add_to_set(KEY_LIKES, "7");
        let after_dup = store.add_to_set(KEY_LIKES, "2");
        assert_eq!(after_dup, vec!["2".to_string(), "7".to_string()]);
        assert_eq!(store.set_members(KEY_LIKES), vec!["2", "7"]);
    }

    #[test]
    fn record_round_trips() {
        let store = Store::in_memory();
        assert_eq!(store.get_record::<TestRecord>(KEY_ME), None);

        let me = TestRecord {
            name: "Sam".to_string(),
            age: 31,
        };
        store.put_record(KEY_ME, &me);
        assert_eq!(store.get_record::<TestRecord>(KEY_ME), Some(me));
    }

    #[test]
    fn corrupt_entry_decodes_to_default() {
        let backend = MemoryBackend::default();
        backend.write(KEY_LIKES, "{not json");
        backend.write(KEY_ME, "[]");
        let store = Store {
            backend: Arc::new(backend),
        };
        assert!(store.set_members(KEY_LIKES).is_empty());
        assert_eq!(store.get_record::<TestRecord>(KEY_ME), None);
    }

    #[test]
    fn clear_all_removes_every_key() {
        let store = Store::in_memory();
        store.add_to_set(KEY_LIKES, "1");
        store.add_to_set(KEY_PASSES, "2");
        store.add_to_set(KEY_MATCHES, "1");
        store.put_record(
            KEY_ME,
            &TestRecord {
                name: "Sam".to_string(),
                age: 31,
            },
        );

        store.clear_all();

        assert!(store.set_members(KEY_LIKES).is_empty());
        assert!(store.set_members(KEY_PASSES).is_empty());
        assert!(store.set_members(KEY_MATCHES).is_empty());
        assert_eq!(store.get_record::<TestRecord>(KEY_ME), None);
    }
}
