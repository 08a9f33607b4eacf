//! Keyed accumulator with validated, monotonic updates.
//!
//! A [`Ledger`] maps string keys to a running numeric total. Values only
//! ever grow: [`Ledger::accumulate`] creates a key on first use, while
//! [`Ledger::adjust`] only touches keys that already exist.

use crate::error::{TallyError, TallyResult};
use crate::models::Entry;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Numeric value stored in a ledger.
pub trait Amount: Copy + PartialOrd + fmt::Display + fmt::Debug {
    /// Value of a key that was never accumulated.
    const ZERO: Self;
    /// Increment used by [`Ledger::increment`].
    const UNIT: Self;
    /// Smallest amount [`Ledger::accumulate`] accepts.
    const MIN_ACCUMULATION: Self;

    /// Whether the value is a usable number (always true for integers).
    fn is_finite(&self) -> bool {
        true
    }

    /// Sum of two values, or `None` if it leaves the representable range.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Total order used for ranking.
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

impl Amount for i64 {
    const ZERO: Self = 0;
    const UNIT: Self = 1;
    const MIN_ACCUMULATION: Self = 1;

    fn checked_add(self, other: Self) -> Option<Self> {
        i64::checked_add(self, other)
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Amount for f64 {
    const ZERO: Self = 0.0;
    const UNIT: Self = 1.0;
    const MIN_ACCUMULATION: Self = 0.0;

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Some(self + other).filter(|sum| f64::is_finite(*sum))
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Mapping from key to accumulated total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger<V> {
    values: HashMap<String, V>,
}

/// Integer ledger used for word counts.
pub type Counter = Ledger<i64>;

/// Floating ledger used for spend totals.
pub type Totals = Ledger<f64>;

impl<V: Amount> Ledger<V> {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Add `amount` to the value stored under `key`, creating it at zero first.
    ///
    /// Fails with [`TallyError::InvalidAmount`] if `amount` is below
    /// [`Amount::MIN_ACCUMULATION`] or the new total would overflow; the
    /// ledger is left untouched.
    pub fn accumulate(&mut self, key: &str, amount: V) -> TallyResult<()> {
        if !amount.is_finite() || amount < V::MIN_ACCUMULATION {
            return Err(TallyError::InvalidAmount {
                key: key.to_string(),
                amount: amount.to_string(),
                minimum: V::MIN_ACCUMULATION.to_string(),
            });
        }

        let next = self
            .value_of(key)
            .checked_add(amount)
            .ok_or_else(|| TallyError::InvalidAmount {
                key: key.to_string(),
                amount: amount.to_string(),
                minimum: format!("{} (total would overflow)", V::MIN_ACCUMULATION),
            })?;

        self.values.insert(key.to_string(), next);
        Ok(())
    }

    /// Accumulate the default increment under `key`.
    pub fn increment(&mut self, key: &str) -> TallyResult<()> {
        self.accumulate(key, V::UNIT)
    }

    /// Current value for `key`, or zero if it was never accumulated.
    pub fn value_of(&self, key: &str) -> V {
        self.values.get(key).copied().unwrap_or(V::ZERO)
    }

    /// Add a non-negative correction to an existing key.
    ///
    /// Unlike [`Ledger::accumulate`] this never creates the key.
    pub fn adjust(&mut self, key: &str, delta: V) -> TallyResult<()> {
        if !delta.is_finite() || delta < V::ZERO {
            return Err(TallyError::InvalidAdjustment {
                key: key.to_string(),
                reason: format!("delta {} must be non-negative", delta),
            });
        }

        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = slot
                    .checked_add(delta)
                    .ok_or_else(|| TallyError::InvalidAdjustment {
                        key: key.to_string(),
                        reason: format!("adding {} would overflow", delta),
                    })?;
                Ok(())
            }
            None => Err(TallyError::InvalidAdjustment {
                key: key.to_string(),
                reason: "key has no accumulated value".to_string(),
            }),
        }
    }

    /// Whether `key` has been accumulated at least once.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of every stored value, or `None` if it overflows.
    pub fn total(&self) -> Option<V> {
        self.values
            .values()
            .try_fold(V::ZERO, |acc, v| acc.checked_add(*v))
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<V>> + '_ {
        self.values.iter().map(|(key, value)| Entry::new(key.clone(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_sum_of_accumulations() {
        let mut counter = Counter::new();
        counter.accumulate("hello", 3).unwrap();
        counter.increment("hello").unwrap();
        counter.accumulate("world", 2).unwrap();

        assert_eq!(counter.value_of("hello"), 4);
        assert_eq!(counter.value_of("world"), 2);
        assert_eq!(counter.value_of("missing"), 0);
        assert_eq!(counter.total(), Some(6));
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn test_integer_rejects_amount_below_one() {
        let mut counter = Counter::new();
        counter.accumulate("hello", 2).unwrap();

        let err = counter.accumulate("hello", 0).unwrap_err();
        assert!(matches!(err, TallyError::InvalidAmount { .. }));
        assert!(counter.accumulate("new", -4).is_err());

        assert_eq!(counter.value_of("hello"), 2);
        assert!(!counter.contains("new"));
    }

    #[test]
    fn test_float_zero_accumulation_is_noop() {
        let mut totals = Totals::new();
        totals.accumulate("alice", 10.0).unwrap();
        totals.accumulate("alice", 0.0).unwrap();

        assert_eq!(totals.value_of("alice"), 10.0);
    }

    #[test]
    fn test_float_rejects_negative_and_nan() {
        let mut totals = Totals::new();
        assert!(totals.accumulate("alice", -0.5).is_err());
        assert!(totals.accumulate("alice", f64::NAN).is_err());
        assert!(totals.accumulate("alice", f64::INFINITY).is_err());
        assert!(totals.is_empty());
    }

    #[test]
    fn test_adjust_existing_key() {
        let mut totals = Totals::new();
        totals.accumulate("alice", 12.0).unwrap();
        totals.adjust("alice", 0.25).unwrap();

        assert_eq!(totals.value_of("alice"), 12.25);
    }

    #[test]
    fn test_adjust_rejects_missing_key_and_negative_delta() {
        let mut totals = Totals::new();
        totals.accumulate("alice", 12.0).unwrap();

        let missing = totals.adjust("bob", 1.0).unwrap_err();
        assert!(matches!(missing, TallyError::InvalidAdjustment { .. }));
        assert!(!totals.contains("bob"));

        let negative = totals.adjust("alice", -1.0).unwrap_err();
        assert!(matches!(negative, TallyError::InvalidAdjustment { .. }));
        assert_eq!(totals.value_of("alice"), 12.0);
    }

    #[test]
    fn test_integer_overflow_is_rejected() {
        let mut counter = Counter::new();
        counter.accumulate("k", i64::MAX).unwrap();

        let err = counter.increment("k").unwrap_err();
        assert!(matches!(err, TallyError::InvalidAmount { .. }));
        assert_eq!(counter.value_of("k"), i64::MAX);

        let err = counter.adjust("k", 1).unwrap_err();
        assert!(matches!(err, TallyError::InvalidAdjustment { .. }));
        assert_eq!(counter.value_of("k"), i64::MAX);

        counter.increment("other").unwrap();
        assert_eq!(counter.total(), None);
    }

    #[test]
    fn test_float_overflow_is_rejected() {
        let mut totals = Totals::new();
        totals.accumulate("k", f64::MAX).unwrap();

        let err = totals.accumulate("k", f64::MAX).unwrap_err();
        assert!(matches!(err, TallyError::InvalidAmount { .. }));
        assert_eq!(totals.value_of("k"), f64::MAX);

        let err = totals.adjust("k", f64::MAX).unwrap_err();
        assert!(matches!(err, TallyError::InvalidAdjustment { .. }));
        assert!(totals.value_of("k").is_finite());
    }

    #[test]
    fn test_max_value_on_fresh_key_is_accepted() {
        let mut counter = Counter::new();
        counter.accumulate("k", i64::MAX).unwrap();
        assert!(counter.accumulate("fresh", i64::MAX).is_ok());
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn test_entries_cover_all_keys() {
        let mut counter = Counter::new();
        counter.increment("a").unwrap();
        counter.increment("b").unwrap();

        let mut keys: Vec<String> = counter.entries().map(|e| e.key).collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
