//! Ranking report generation.
//!
//! This module renders ranked ledger entries as plain text lines or as a
//! JSON document.

use crate::models::{Entry, RankedEntry};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// A rendered-ready ranking plus the context it was produced in.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport<V> {
    /// Report title (e.g. "word frequency").
    pub title: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Category the ledger was filtered by, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Requested number of entries.
    pub limit: usize,
    /// Individually queried keys and their values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lookups: Vec<Entry<V>>,
    /// Ranked entries, best first.
    pub entries: Vec<RankedEntry<V>>,
}

impl<V> RankingReport<V> {
    pub fn new(title: impl Into<String>, limit: usize, entries: Vec<RankedEntry<V>>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            category: None,
            limit,
            lookups: Vec::new(),
            entries,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_lookups(mut self, lookups: Vec<Entry<V>>) -> Self {
        self.lookups = lookups;
        self
    }
}

/// Format a money total with a currency prefix and fixed precision.
pub fn format_money(value: f64, currency: &str, precision: usize) -> String {
    format!("{}{:.*}", currency, precision, value)
}

/// Render a report as text, formatting each value with `fmt_value`.
///
/// Lookups come first as `key: value`, followed by one
/// `rank. key: value` line per ranked entry.
pub fn generate_text_report<V, F, D>(report: &RankingReport<V>, fmt_value: F) -> String
where
    F: Fn(&V) -> D,
    D: Display,
{
    let mut output = String::new();

    for lookup in &report.lookups {
        output.push_str(&format!("{}: {}\n", lookup.key, fmt_value(&lookup.value)));
    }

    for entry in &report.entries {
        output.push_str(&format!(
            "{}. {}: {}\n",
            entry.rank,
            entry.key,
            fmt_value(&entry.value)
        ));
    }

    output
}

/// Generate a JSON report.
pub fn generate_json_report<V: Serialize>(report: &RankingReport<V>) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
