//! Core data model and pure pipeline stages for the cinelist catalog:
//! film entries, snapshots, the runtime/category filter, deduplication,
//! diffing, and the add-vs-replace sync policy. No I/O lives here.

pub mod diff;
pub mod filter;
pub mod snapshot;
pub mod types;

pub use diff::{DEFAULT_MAX_REMOVALS, SnapshotDiff, SyncDecision, SyncPolicy, diff};
pub use filter::{DEFAULT_CATEGORY, DEFAULT_MIN_RUNTIME_MINUTES, FilmFilter};
pub use snapshot::CatalogSnapshot;
pub use types::{FilmEntry, FilmKey};
