//! Deterministic top-K ranking over a ledger.

use crate::analysis::ledger::{Amount, Ledger};
use crate::error::{TallyError, TallyResult};
use crate::models::{Entry, RankedEntry};
use std::cmp::Ordering;

/// Ordering used everywhere a ranking is produced: higher value first,
/// then lexicographically smaller key.
fn rank_order<V: Amount>(a: &Entry<V>, b: &Entry<V>) -> Ordering {
    b.value
        .rank_cmp(&a.value)
        .then_with(|| a.key.cmp(&b.key))
}

/// Return at most `k` entries sorted by descending value, ties by ascending key.
pub fn top_k<V: Amount>(ledger: &Ledger<V>, k: usize) -> Vec<Entry<V>> {
    if k == 0 {
        return Vec::new();
    }

    let mut entries: Vec<Entry<V>> = ledger.entries().collect();
    entries.sort_by(rank_order);
    entries.truncate(k);
    entries
}

/// The single highest-ranked entry.
pub fn best<V: Amount>(ledger: &Ledger<V>) -> TallyResult<Entry<V>> {
    top_k(ledger, 1)
        .into_iter()
        .next()
        .ok_or(TallyError::EmptyLedger)
}

/// Like [`top_k`], with 1-based ranks attached.
pub fn ranked<V: Amount>(ledger: &Ledger<V>, k: usize) -> Vec<RankedEntry<V>> {
    top_k(ledger, k)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            rank: i + 1,
            key: entry.key,
            value: entry.value,
        })
        .collect()
}
