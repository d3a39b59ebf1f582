use std::collections::HashMap;

use chrono::Utc;
use log::warn;
use serde::{Deserialize, Serialize};

use super::KeyValueStorage;

/// The whole bookmark map lives under this one storage key.
pub const BOOKMARKS_KEY: &str = "garco_bookmarks";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub volume_id: String,
    pub page_index: usize,
    pub timestamp: i64,
}

/// Last-read positions, one per volume, persisted best-effort: a failed
/// write costs at most a bookmark, never an in-memory transition.
pub struct BookmarkStore<S> {
    storage: S,
}

impl<S> BookmarkStore<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: S) -> BookmarkStore<S> {
        BookmarkStore { storage }
    }

    /// Missing or corrupt backing data reads as an empty map.
    pub fn load(&self) -> HashMap<String, Bookmark> {
        self.storage
            .get(BOOKMARKS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn get(&self, volume_id: &str) -> Option<Bookmark> {
        self.load().remove(volume_id)
    }

    /// Upserts the volume's bookmark and persists the whole map. Storage
    /// failures are logged and swallowed.
    pub fn save(&mut self, volume_id: &str, page_index: usize) {
        let mut bookmarks = self.load();
        bookmarks.insert(
            volume_id.to_owned(),
            Bookmark {
                volume_id: volume_id.to_owned(),
                page_index,
                timestamp: Utc::now().timestamp_millis(),
            },
        );

        let raw = match serde_json::to_string(&bookmarks) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("bookmark serialization failed: {}", error);
                return;
            }
        };

        if let Err(error) = self.storage.set(BOOKMARKS_KEY, &raw) {
            warn!("bookmark write failed: {:#}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn save_then_load_round_trips() {
        let mut store = BookmarkStore::new(MemoryStorage::default());
        store.save("vol_amazing-vol-1", 7);

        let bookmarks = store.load();
        let bookmark = &bookmarks["vol_amazing-vol-1"];
        assert_eq!(bookmark.volume_id, "vol_amazing-vol-1");
        assert_eq!(bookmark.page_index, 7);
    }

    #[test]
    fn save_overwrites_with_non_decreasing_timestamp() {
        let mut store = BookmarkStore::new(MemoryStorage::default());

        store.save("vol_a", 1);
        let first = store.get("vol_a").unwrap();

        store.save("vol_a", 2);
        let second = store.get("vol_a").unwrap();

        assert_eq!(store.load().len(), 1);
        assert_eq!(second.page_index, 2);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn missing_backing_data_loads_empty() {
        let store = BookmarkStore::new(MemoryStorage::default());
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_backing_data_loads_empty() {
        let mut storage = MemoryStorage::default();
        storage.set(BOOKMARKS_KEY, "not json {").unwrap();

        let store = BookmarkStore::new(storage);
        assert!(store.load().is_empty());
    }

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("disk gone"))
        }
    }

    #[test]
    fn write_failure_is_swallowed() {
        let mut store = BookmarkStore::new(BrokenStorage);
        store.save("vol_a", 3);
        assert!(store.load().is_empty());
    }
}
