use cinelist_catalog::{CatalogSnapshot, FilmEntry, SnapshotDiff, SyncDecision, SyncPolicy, diff};

fn bare(title: &str, director: &str, year: u16) -> FilmEntry {
    FilmEntry::bare(title, director, Some(year))
}

fn snapshot(entries: Vec<FilmEntry>) -> CatalogSnapshot {
    CatalogSnapshot::from_entries(entries)
}

#[test]
fn diff_of_identical_snapshots_is_empty() {
    let a = snapshot(vec![bare("A", "X", 2000), bare("B", "Y", 2001)]);
    let d = diff(&a, &a.clone());
    assert!(d.is_empty());
}

#[test]
fn scenario_additions_only() {
    let previous = snapshot(vec![bare("A", "X", 2000)]);
    let current = snapshot(vec![bare("A", "X", 2000), bare("B", "Y", 2001)]);

    let d = diff(&previous, &current);
    assert_eq!(d.additions, vec![bare("B", "Y", 2001)]);
    assert!(d.removals.is_empty());
}

#[test]
fn diff_is_a_set_difference_both_ways() {
    let previous = snapshot(vec![bare("A", "X", 2000), bare("B", "Y", 2001)]);
    let current = snapshot(vec![bare("B", "Y", 2001), bare("C", "Z", 2002)]);

    let d = diff(&previous, &current);
    assert_eq!(d.additions, vec![bare("C", "Z", 2002)]);
    assert_eq!(d.removals, vec![bare("A", "X", 2000)]);
}

#[test]
fn diff_uses_identity_not_runtime_or_category() {
    let mut old_entry = bare("A", "X", 2000);
    old_entry.runtime_minutes = 90;
    old_entry.category = "Cinema".to_string();

    // Same identity re-read from a CSV export carries neither field.
    let previous = snapshot(vec![old_entry]);
    let current = snapshot(vec![bare("A", "X", 2000)]);

    assert!(diff(&previous, &current).is_empty());
}

#[test]
fn diff_preserves_snapshot_order() {
    let previous = snapshot(vec![bare("A", "X", 2000)]);
    let current = snapshot(vec![
        bare("C", "Z", 2002),
        bare("A", "X", 2000),
        bare("B", "Y", 2001),
    ]);

    let d = diff(&previous, &current);
    let titles: Vec<_> = d.additions.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "B"]);
}

#[test]
fn policy_no_change_for_empty_diff() {
    let policy = SyncPolicy::default();
    assert_eq!(policy.decide(&SnapshotDiff::default()), SyncDecision::NoChange);
}

#[test]
fn policy_incremental_for_pure_additions() {
    let policy = SyncPolicy::default();
    let d = SnapshotDiff {
        additions: vec![bare("B", "Y", 2001)],
        removals: vec![],
    };
    assert_eq!(policy.decide(&d), SyncDecision::Incremental);
}

#[test]
fn policy_full_replace_when_anything_was_removed() {
    let policy = SyncPolicy::default();
    let d = SnapshotDiff {
        additions: vec![bare("B", "Y", 2001)],
        removals: vec![bare("A", "X", 2000)],
    };
    assert_eq!(policy.decide(&d), SyncDecision::FullReplace);
}

#[test]
fn policy_force_full_overrides_additive_diff() {
    let policy = SyncPolicy {
        force_full: true,
        ..SyncPolicy::default()
    };
    let d = SnapshotDiff {
        additions: vec![bare("B", "Y", 2001)],
        removals: vec![],
    };
    assert_eq!(policy.decide(&d), SyncDecision::FullReplace);
}

#[test]
fn policy_aborts_on_suspicious_removals() {
    let policy = SyncPolicy {
        force_full: false,
        max_removals: 2,
    };
    let d = SnapshotDiff {
        additions: vec![],
        removals: vec![bare("A", "X", 2000), bare("B", "Y", 2001), bare("C", "Z", 2002)],
    };
    assert_eq!(
        policy.decide(&d),
        SyncDecision::SuspiciousRemovals {
            removed: 3,
            limit: 2
        }
    );
}
