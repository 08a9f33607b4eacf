//! Maximum-finding helpers.

use crate::error::{TallyError, TallyResult};

/// The larger of `a` and `b`; `a` when they are equal.
pub fn max_2(a: f64, b: f64) -> f64 {
    if b > a {
        b
    } else {
        a
    }
}

/// The largest element of `values`.
pub fn max_list(values: &[f64]) -> TallyResult<f64> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| TallyError::InvalidInput("list is empty".to_string()))?;

    Ok(rest.iter().fold(*first, |largest, &v| max_2(largest, v)))
}

/// The largest of a variable number of arguments.
pub fn max_variable(args: &[f64]) -> TallyResult<f64> {
    if args.is_empty() {
        return Err(TallyError::InvalidInput("no arguments provided".to_string()));
    }
    max_list(args)
}
