pub mod bookmarks;

pub use bookmarks::{Bookmark, BookmarkStore, BOOKMARKS_KEY};

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

const DATA_DIR: &str = "garco";

/// Injected persistence capability. The backing medium is swappable so the
/// stores above it can run against a file on disk or an in-memory fake.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backing store, used in tests and anywhere durability is not
/// wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Backing store keeping one `<key>.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: PathBuf) -> FileStorage {
        FileStorage { directory }
    }

    /// Opens the per-user data directory, creating it on first use.
    pub fn in_data_dir() -> Result<FileStorage> {
        let mut directory = dirs::data_dir().ok_or(anyhow!("No data dir"))?;
        directory.push(DATA_DIR);
        fs::create_dir_all(&directory)?;

        Ok(FileStorage::new(directory))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let mut storage = MemoryStorage::default();
        assert_eq!(storage.get("missing"), None);

        storage.set("key", "value").unwrap();
        assert_eq!(storage.get("key"), Some("value".to_owned()));

        storage.set("key", "replaced").unwrap();
        assert_eq!(storage.get("key"), Some("replaced".to_owned()));
    }
}
