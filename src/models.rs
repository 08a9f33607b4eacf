//! Data models shared by the ledger, the ranker and the reports.
//!
//! This module contains the value types that flow out of a ledger
//! ([`Entry`], [`RankedEntry`]) and the purchase-like [`Record`] that
//! flows into a category-filtered one.

use crate::error::{TallyError, TallyResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single (key, value) pair read out of a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<V> {
    /// Word or user name.
    pub key: String,
    /// Accumulated value at the time the entry was taken.
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// An entry with its 1-based position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry<V> {
    pub rank: usize,
    pub key: String,
    pub value: V,
}

/// A raw record carrying a key, a category and an amount.
///
/// Build one with [`Record::new`] to get trimming and validation. The
/// fields stay public so unvalidated records (from other sources) can still
/// be handed to the filtered aggregation, which checks amounts again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// User name the amount is credited to.
    pub key: String,
    /// Category used for filtering (e.g. a country code).
    pub category: String,
    /// Spend amount, including any applied fees.
    pub amount: f64,
}

impl Record {
    /// Create a validated record.
    ///
    /// Key and category are trimmed. Fails with [`TallyError::InvalidInput`]
    /// on an empty key and [`TallyError::InvalidRecord`] on a negative or
    /// non-finite amount.
    pub fn new(key: &str, category: &str, amount: f64) -> TallyResult<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Err(TallyError::InvalidInput("key must be non-empty".to_string()));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(TallyError::InvalidRecord {
                key: key.to_string(),
                reason: format!("amount {} must be non-negative", amount),
            });
        }

        Ok(Self {
            key: key.to_string(),
            category: category.trim().to_string(),
            amount,
        })
    }

    /// Returns true if the record belongs to `category` (exact, case-sensitive).
    pub fn matches(&self, category: &str) -> bool {
        self.category == category
    }

    /// Add a non-negative fee to the amount.
    pub fn apply_fee(&mut self, fee: f64) -> TallyResult<()> {
        if !fee.is_finite() || fee < 0.0 {
            return Err(TallyError::InvalidAdjustment {
                key: self.key.clone(),
                reason: format!("fee {} must be non-negative", fee),
            });
        }
        self.amount += fee;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_trims_fields() {
        let record = Record::new("  alice ", " UK ", 10.0).unwrap();
        assert_eq!(record.key, "alice");
        assert_eq!(record.category, "UK");
        assert!(record.matches("UK"));
        assert!(!record.matches("uk"));
        assert!(!record.matches("FR"));
    }

    #[test]
    fn test_record_new_rejects_bad_fields() {
        assert!(matches!(
            Record::new("   ", "UK", 1.0),
            Err(TallyError::InvalidInput(_))
        ));
        assert!(matches!(
            Record::new("bob", "UK", -1.0),
            Err(TallyError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_apply_fee() {
        let mut record = Record::new("alice", "UK", 10.0).unwrap();
        record.apply_fee(0.25).unwrap();
        assert_eq!(record.amount, 10.25);

        assert!(record.apply_fee(-0.1).is_err());
        assert_eq!(record.amount, 10.25);
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry::new("cat", 3);
        assert_eq!(entry.to_string(), "cat: 3");
    }
}
