//! Data model types for the film catalog.
//!
//! A `FilmEntry` is one film as parsed from the source listing. Identity for
//! deduplication and diffing is the `(title, director, year)` tuple; runtime
//! and category are filter inputs, not identity.

use serde::{Deserialize, Serialize};

/// A single film from the source catalog. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilmEntry {
    pub title: String,
    /// Director name(s), comma-joined. Empty when the source omits them.
    pub director: String,
    /// Production year. The source omits it for some entries.
    pub year: Option<u16>,
    /// Runtime in whole minutes.
    #[serde(default)]
    pub runtime_minutes: u32,
    /// Category name as published by the source (e.g. "Cinema").
    #[serde(default)]
    pub category: String,
}

impl FilmEntry {
    /// Identity key for this entry.
    pub fn key(&self) -> FilmKey {
        FilmKey {
            title: self.title.clone(),
            director: self.director.clone(),
            year: self.year,
        }
    }

    /// Build an entry from identity fields only, e.g. when re-reading a
    /// previous export that does not record runtime or category.
    pub fn bare(title: impl Into<String>, director: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            year,
            runtime_minutes: 0,
            category: String::new(),
        }
    }
}

/// The `(title, director, year)` identity tuple of a film.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilmKey {
    pub title: String,
    pub director: String,
    pub year: Option<u16>,
}

impl std::fmt::Display for FilmKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.title)?;
        if !self.director.is_empty() {
            write!(f, " - {}", self.director)?;
        }
        if let Some(year) = self.year {
            write!(f, " ({})", year)?;
        }
        Ok(())
    }
}
