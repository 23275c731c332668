//! Runtime/category filter applied to parsed entries.

use crate::types::FilmEntry;

/// Minimum runtime in minutes for an entry to count as a feature film.
pub const DEFAULT_MIN_RUNTIME_MINUTES: u32 = 50;

/// Category name kept by default.
pub const DEFAULT_CATEGORY: &str = "Cinema";

/// Pure predicate deciding which entries make it into a snapshot.
#[derive(Debug, Clone)]
pub struct FilmFilter {
    /// Entries must run strictly longer than this many minutes.
    pub min_runtime_minutes: u32,
    /// Entries must carry exactly this category name.
    pub category: String,
}

impl Default for FilmFilter {
    fn default() -> Self {
        Self {
            min_runtime_minutes: DEFAULT_MIN_RUNTIME_MINUTES,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl FilmFilter {
    pub fn new(min_runtime_minutes: u32, category: impl Into<String>) -> Self {
        Self {
            min_runtime_minutes,
            category: category.into(),
        }
    }

    /// `true` when the entry is long enough and in the wanted category.
    pub fn keep(&self, entry: &FilmEntry) -> bool {
        entry.runtime_minutes > self.min_runtime_minutes && entry.category == self.category
    }
}
