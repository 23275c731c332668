//! CSV export/reload of catalog snapshots for cinelist.

pub mod csv_file;
pub mod error;

pub use csv_file::{load_snapshot, write_entries, write_snapshot};
pub use error::ExportError;
