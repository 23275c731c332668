//! Snapshot diffing and the add-vs-replace sync decision.
//!
//! Diffing is a plain identity-tuple set difference. What to do with the
//! diff is a separate, explicit policy: there is no rigorous rule for when
//! a full replace beats an incremental add, so the choice is surfaced as
//! [`SyncPolicy`] instead of an inferred heuristic.

use crate::snapshot::CatalogSnapshot;
use crate::types::FilmEntry;

/// Abort the sync when more than this many films disappear at once, unless
/// the caller overrides the limit. A mass removal usually means the source
/// served a truncated listing, not a real catalog change.
pub const DEFAULT_MAX_REMOVALS: usize = 100;

/// Result of diffing a fresh snapshot against the previously exported one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// Entries present now but not in the previous export, in current order.
    pub additions: Vec<FilmEntry>,
    /// Entries present in the previous export but gone now, in previous order.
    pub removals: Vec<FilmEntry>,
}

impl SnapshotDiff {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }
}

/// Compute `current − previous` and `previous − current` by identity key.
pub fn diff(previous: &CatalogSnapshot, current: &CatalogSnapshot) -> SnapshotDiff {
    let previous_keys = previous.keys();
    let current_keys = current.keys();

    let additions = current
        .iter()
        .filter(|e| !previous_keys.contains(&e.key()))
        .cloned()
        .collect();
    let removals = previous
        .iter()
        .filter(|e| !current_keys.contains(&e.key()))
        .cloned()
        .collect();

    SnapshotDiff { additions, removals }
}

/// Caller-facing policy for turning a diff into a sync decision.
#[derive(Debug, Clone)]
pub struct SyncPolicy {
    /// Always replace the whole remote list, even for a purely additive diff.
    pub force_full: bool,
    /// Removal count above which the diff is treated as suspicious.
    pub max_removals: usize,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            force_full: false,
            max_removals: DEFAULT_MAX_REMOVALS,
        }
    }
}

/// What the sync driver should be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDecision {
    /// Nothing changed; skip the sync entirely.
    NoChange,
    /// Append only the new entries to the remote list.
    Incremental,
    /// Replace the whole remote list with the current snapshot.
    FullReplace,
    /// Too many entries vanished at once; refuse to touch the remote list.
    SuspiciousRemovals { removed: usize, limit: usize },
}

impl SyncPolicy {
    /// Decide how to apply a diff.
    ///
    /// Removals force a full replace: an incremental import can only append,
    /// so a shrunken catalog can never be reconciled additively.
    pub fn decide(&self, diff: &SnapshotDiff) -> SyncDecision {
        let removed = diff.removals.len();
        if removed > self.max_removals {
            return SyncDecision::SuspiciousRemovals {
                removed,
                limit: self.max_removals,
            };
        }
        if self.force_full {
            return SyncDecision::FullReplace;
        }
        if removed > 0 {
            return SyncDecision::FullReplace;
        }
        if diff.additions.is_empty() {
            return SyncDecision::NoChange;
        }
        SyncDecision::Incremental
    }
}
