//! Parsing of `key,category,amount` lines into records.

use crate::error::{TallyError, TallyResult};
use crate::models::Record;
use tracing::debug;

/// Built-in purchase lines used when no input file is given.
pub const DEMO_LINES: [&str; 5] = [
    "alice,UK,10.0",
    "bob,UK,3.5",
    "alice,UK,2.0",
    "carla,FR,100.0",
    "bob,UK,5.0",
];

/// Fee carried by the first demo purchase.
pub const DEMO_FEE: f64 = 0.25;

/// Parse CSV-like lines into validated records.
///
/// Blank lines and lines starting with `#` are skipped. Errors name the
/// 1-based line number of the offending line.
pub fn parse_records<I, S>(lines: I) -> TallyResult<Vec<Record>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        records.push(parse_line(line).map_err(|e| match e {
            TallyError::InvalidInput(reason) => {
                TallyError::InvalidInput(format!("line {}: {}", line_no, reason))
            }
            TallyError::InvalidRecord { key, reason } => TallyError::InvalidRecord {
                key,
                reason: format!("line {}: {}", line_no, reason),
            },
            other => other,
        })?);
    }

    debug!("Parsed {} records", records.len());
    Ok(records)
}

/// The built-in demo records.
///
/// With `with_fee`, the first purchase carries [`DEMO_FEE`].
pub fn demo_records(with_fee: bool) -> TallyResult<Vec<Record>> {
    let mut records = parse_records(DEMO_LINES)?;
    if with_fee {
        if let Some(first) = records.first_mut() {
            first.apply_fee(DEMO_FEE)?;
        }
    }
    Ok(records)
}

fn parse_line(line: &str) -> TallyResult<Record> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [key, category, amount] = fields.as_slice() else {
        return Err(TallyError::InvalidInput(format!(
            "expected 3 fields (key,category,amount), found {}",
            fields.len()
        )));
    };

    let amount: f64 = amount
        .parse()
        .map_err(|_| TallyError::InvalidInput(format!("amount '{}' is not a number", amount)))?;

    Record::new(key, category, amount)
}
