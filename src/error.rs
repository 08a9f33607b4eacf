//! Error types for ledger, ranking and record operations.

/// Errors raised by the counting and ranking core.
///
/// Every variant is raised at the point of violation and handed back to the
/// caller unchanged; nothing in the core retries or recovers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TallyError {
    #[error("invalid amount {amount} for '{key}': must be at least {minimum}")]
    InvalidAmount {
        key: String,
        amount: String,
        minimum: String,
    },

    #[error("invalid adjustment for '{key}': {reason}")]
    InvalidAdjustment { key: String, reason: String },

    #[error("ledger is empty")]
    EmptyLedger,

    #[error("invalid record for '{key}': {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type TallyResult<T> = std::result::Result<T, TallyError>;
