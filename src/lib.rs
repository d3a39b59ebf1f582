pub mod catalog;
pub mod reader;
pub mod storage;

pub use crate::catalog::{fetch_catalog, ComicPage, LibraryIndex, Volume, DEFAULT_CATALOG_URL};
pub use crate::reader::{FitMode, ReaderSession};
pub use crate::storage::{Bookmark, BookmarkStore, FileStorage, KeyValueStorage, MemoryStorage};
