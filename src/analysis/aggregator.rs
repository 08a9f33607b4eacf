//! Building ledgers from raw input.
//!
//! This module turns text into word counts and purchase records into
//! category-scoped spend totals.

use crate::analysis::ledger::{Counter, Totals};
use crate::analysis::tokenizer::{tokenize, TokenizeOptions};
use crate::error::{TallyError, TallyResult};
use crate::models::Record;
use tracing::debug;

/// Count every word in `text`.
pub fn count_words(text: &str, options: &TokenizeOptions) -> TallyResult<Counter> {
    let mut counter = Counter::new();
    for word in tokenize(text, options) {
        counter.increment(&word)?;
    }

    debug!("Counted {} distinct words", counter.len());
    Ok(counter)
}

/// Sum record amounts per key, keeping only records in `category`.
///
/// Records from other categories are skipped without inspection. A matching
/// record with a negative amount aborts the build.
pub fn build_filtered_ledger(records: &[Record], category: &str) -> TallyResult<Totals> {
    let category = category.trim();
    let mut totals = Totals::new();
    let mut matched = 0usize;

    for record in records.iter().filter(|r| r.matches(category)) {
        if !record.amount.is_finite() || record.amount < 0.0 {
            return Err(TallyError::InvalidRecord {
                key: record.key.clone(),
                reason: format!("amount {} must be non-negative", record.amount),
            });
        }
        totals.accumulate(&record.key, record.amount)?;
        matched += 1;
    }

    debug!(
        "Built ledger for category '{}': {} of {} records, {} keys",
        category,
        matched,
        records.len(),
        totals.len()
    );
    Ok(totals)
}
