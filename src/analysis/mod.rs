//! Counting and ranking core.
//!
//! Ledgers accumulate keyed totals; the ranker turns them into ordered,
//! tie-broken top-K lists.

pub mod aggregator;
pub mod ledger;
pub mod ranking;
pub mod tokenizer;

pub use aggregator::{build_filtered_ledger, count_words};
pub use ranking::{best, ranked};
pub use tokenizer::TokenizeOptions;
