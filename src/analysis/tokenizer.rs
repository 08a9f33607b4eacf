//! Whitespace tokenizer for word counting.

/// Characters trimmed from both ends of each word by default.
pub const DEFAULT_STRIP_CHARS: &str = ".,!?";

/// Options controlling how text is split into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Characters removed from the start and end of each word.
    pub strip_chars: String,
    /// Fold words to lowercase before counting.
    pub lowercase: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            strip_chars: DEFAULT_STRIP_CHARS.to_string(),
            lowercase: true,
        }
    }
}

/// Split `text` on whitespace and normalize each word.
///
/// Words that are empty once punctuation is stripped are dropped.
pub fn tokenize<'a>(text: &'a str, options: &'a TokenizeOptions) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace().filter_map(move |raw| {
        let word = raw.trim_matches(|c: char| options.strip_chars.contains(c));
        if word.is_empty() {
            return None;
        }
        Some(if options.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_and_lowercases() {
        let options = TokenizeOptions::default();
        let words: Vec<String> = tokenize("The cat. Poor cat!", &options).collect();
        assert_eq!(words, vec!["the", "cat", "poor", "cat"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_punctuation() {
        let options = TokenizeOptions::default();
        let words: Vec<String> = tokenize("e.g. don't", &options).collect();
        assert_eq!(words, vec!["e.g", "don't"]);
    }

    #[test]
    fn test_tokenize_drops_punctuation_only_tokens() {
        let options = TokenizeOptions::default();
        let words: Vec<String> = tokenize("hello ... !? world", &options).collect();
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_keep_case() {
        let options = TokenizeOptions {
            lowercase: false,
            ..TokenizeOptions::default()
        };
        let words: Vec<String> = tokenize("Hello hello", &options).collect();
        assert_eq!(words, vec!["Hello", "hello"]);
    }
}
