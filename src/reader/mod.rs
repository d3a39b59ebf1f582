pub mod session;

pub use session::{FitMode, ReaderSession, MAX_ZOOM, MIN_ZOOM};
