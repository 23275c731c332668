//! Deduplicated, ordered snapshot of the catalog at one point in time.

use std::collections::HashSet;

use crate::types::{FilmEntry, FilmKey};

/// An ordered, deduplicated collection of film entries.
///
/// Invariant: no two entries share the same identity key. Construction via
/// [`CatalogSnapshot::from_entries`] enforces this by keeping the first
/// occurrence of each key and discarding later duplicates, so output order
/// is deterministic for a given input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    entries: Vec<FilmEntry>,
}

impl CatalogSnapshot {
    /// Build a snapshot from an ordered sequence of entries, dropping later
    /// duplicates in favor of the first occurrence.
    pub fn from_entries(entries: impl IntoIterator<Item = FilmEntry>) -> Self {
        let mut seen: HashSet<FilmKey> = HashSet::new();
        let mut deduped = Vec::new();
        for entry in entries {
            if seen.insert(entry.key()) {
                deduped.push(entry);
            }
        }
        Self { entries: deduped }
    }

    pub fn entries(&self) -> &[FilmEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilmEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The set of identity keys present in this snapshot.
    pub fn keys(&self) -> HashSet<FilmKey> {
        self.entries.iter().map(FilmEntry::key).collect()
    }
}

impl FromIterator<FilmEntry> for CatalogSnapshot {
    fn from_iter<T: IntoIterator<Item = FilmEntry>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl IntoIterator for CatalogSnapshot {
    type Item = FilmEntry;
    type IntoIter = std::vec::IntoIter<FilmEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a CatalogSnapshot {
    type Item = &'a FilmEntry;
    type IntoIter = std::slice::Iter<'a, FilmEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
