//! Text repetition.

use crate::error::{TallyError, TallyResult};

pub const DEFAULT_TEXT: &str = "Hello, World!\n";

/// Largest output `repeat_text` will build.
pub const MAX_OUTPUT_BYTES: usize = 64 * 1024 * 1024;

/// Repeat `text` `times` times, optionally uppercased.
pub fn repeat_text(text: &str, times: i64, uppercase: bool) -> TallyResult<String> {
    if times < 1 {
        return Err(TallyError::InvalidAmount {
            key: "times".to_string(),
            amount: times.to_string(),
            minimum: "1".to_string(),
        });
    }

    let text = if uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };

    let within_limit = usize::try_from(times)
        .ok()
        .and_then(|n| text.len().checked_mul(n))
        .is_some_and(|len| len <= MAX_OUTPUT_BYTES);
    if !within_limit {
        return Err(TallyError::InvalidAmount {
            key: "times".to_string(),
            amount: times.to_string(),
            minimum: format!("1, with output under {} bytes", MAX_OUTPUT_BYTES),
        });
    }

    Ok(text.repeat(times as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_default_text() {
        let out = repeat_text(DEFAULT_TEXT, 2, false).unwrap();
        assert_eq!(out, "Hello, World!\nHello, World!\n");
    }

    #[test]
    fn test_repeat_uppercase() {
        let out = repeat_text(DEFAULT_TEXT, 1, true).unwrap();
        assert_eq!(out, "HELLO, WORLD!\n");
    }

    #[test]
    fn test_repeat_rejects_zero() {
        assert!(matches!(
            repeat_text("x", 0, false),
            Err(TallyError::InvalidAmount { .. })
        ));
        assert!(repeat_text("x", -3, false).is_err());
    }

    #[test]
    fn test_repeat_rejects_oversized_output() {
        assert!(matches!(
            repeat_text(DEFAULT_TEXT, i64::MAX, false),
            Err(TallyError::InvalidAmount { .. })
        ));
        assert!(repeat_text(DEFAULT_TEXT, 1_000_000_000, true).is_err());
    }
}
