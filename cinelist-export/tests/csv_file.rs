use std::fs;

use cinelist_catalog::{CatalogSnapshot, FilmEntry};
use cinelist_export::{load_snapshot, write_entries, write_snapshot};

fn entry(title: &str, director: &str, year: Option<u16>) -> FilmEntry {
    FilmEntry {
        title: title.to_string(),
        director: director.to_string(),
        year,
        runtime_minutes: 90,
        category: "Cinema".to_string(),
    }
}

#[test]
fn export_then_reload_round_trips_identity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all_films.csv");

    let snapshot = CatalogSnapshot::from_entries(vec![
        entry("Film B", "Dir Y", Some(1999)),
        entry("Titre, avec virgule", "Dir \"Z\"", Some(2010)),
        entry("Sans année", "", None),
    ]);

    write_snapshot(&snapshot, &path).unwrap();
    let reloaded = load_snapshot(&path).unwrap();

    assert_eq!(reloaded.keys(), snapshot.keys());
    // Snapshot order survives the round trip too
    let titles: Vec<_> = reloaded.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Film B", "Titre, avec virgule", "Sans année"]);
}

#[test]
fn export_writes_fixed_header_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("films.csv");

    write_snapshot(
        &CatalogSnapshot::from_entries(vec![entry("Old", "X", Some(2000))]),
        &path,
    )
    .unwrap();
    write_snapshot(
        &CatalogSnapshot::from_entries(vec![entry("New", "Y", Some(2001))]),
        &path,
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("title,director,year"));
    assert_eq!(lines.next(), Some("New,Y,2001"));
    assert_eq!(lines.next(), None);
}

#[test]
fn export_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("films.csv");

    write_entries(&[entry("A", "X", Some(2000))], &path).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["films.csv"]);
}

#[test]
fn missing_previous_export_is_an_empty_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = load_snapshot(&dir.path().join("nope.csv")).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn reload_skips_malformed_year() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("films.csv");
    fs::write(
        &path,
        "title,director,year\nGood,Dir,1999\nBad,Dir,not-a-year\n",
    )
    .unwrap();

    let snapshot = load_snapshot(&path).unwrap();
    let titles: Vec<_> = snapshot.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Good"]);
}

#[test]
fn reload_accepts_empty_year_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("films.csv");
    fs::write(&path, "title,director,year\nSans année,,\n").unwrap();

    let snapshot = load_snapshot(&path).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.entries()[0].year, None);
    assert_eq!(snapshot.entries()[0].director, "");
}
