//! CSV serialization of catalog snapshots.
//!
//! The export records identity fields only, in a fixed column order
//! (`title,director,year`), one header row, UTF-8. Writes go to a sibling
//! temp file first and are renamed into place, so a failed write never
//! leaves a partial file at the target path.

use std::path::Path;

use serde::{Deserialize, Serialize};

use cinelist_catalog::{CatalogSnapshot, FilmEntry};

use crate::error::ExportError;

/// One CSV row. Field order fixes the column order.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    title: String,
    director: String,
    year: Option<u16>,
}

impl From<&FilmEntry> for Row {
    fn from(entry: &FilmEntry) -> Self {
        Self {
            title: entry.title.clone(),
            director: entry.director.clone(),
            year: entry.year,
        }
    }
}

/// Write a whole snapshot to `path`, overwriting any existing file.
pub fn write_snapshot(snapshot: &CatalogSnapshot, path: &Path) -> Result<(), ExportError> {
    write_entries(snapshot.entries(), path)
}

/// Write an explicit list of entries (e.g. an additions-only import file).
pub fn write_entries(entries: &[FilmEntry], path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("csv.tmp");
    let mut writer = csv::Writer::from_path(&tmp)?;
    for entry in entries {
        writer.serialize(Row::from(entry))?;
    }
    writer.flush()?;
    drop(writer);

    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Read a previous export back into a snapshot.
///
/// A missing file is an empty snapshot (first run). Malformed rows are
/// skipped with a warning; the export only records identity fields, so the
/// resulting entries carry no runtime or category.
pub fn load_snapshot(path: &Path) -> Result<CatalogSnapshot, ExportError> {
    if !path.exists() {
        return Ok(CatalogSnapshot::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for result in reader.deserialize::<Row>() {
        match result {
            Ok(row) => entries.push(FilmEntry::bare(row.title, row.director, row.year)),
            Err(e) => {
                log::warn!("skipping malformed row in {}: {}", path.display(), e);
            }
        }
    }

    Ok(CatalogSnapshot::from_entries(entries))
}
