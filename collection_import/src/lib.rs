//! Collection Import
//!
//! Reads a collection export, normalizes every row to a canonical card
//! listing and rewrites the board's collection list with the result.

pub mod layout;
pub mod normalizer;
pub mod sync;

pub use layout::ExportLayout;
pub use normalizer::{import_file, normalize_export, ImportOptions, ImportSummary};
pub use sync::{sync_collection, SyncTarget};
