//! Report rendering for rankings.

pub mod generator;

pub use generator::{format_money, generate_json_report, generate_text_report, RankingReport};
