//! Pstore region parameters: their representation, detection in `expdb` and resolution.

pub mod detect;
pub mod region;
pub mod resolve;

pub use detect::{detect_from_expdb, find_pstore_hints};
pub use region::{HexValue, PstoreConfig, PstoreHints};
pub use resolve::resolve_pstore_config;
