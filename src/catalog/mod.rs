pub mod library;
pub mod page;
pub mod remote;
pub mod volume;

pub use library::{assistant_context, LetterGroup, LibraryIndex, SeriesGroup};
pub use page::ComicPage;
pub use remote::{fetch_catalog, DEFAULT_CATALOG_URL};
pub use volume::{normalize, CatalogDocument, RawVolume, Volume};
