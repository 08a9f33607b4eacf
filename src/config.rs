//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.tally.toml` files.

use crate::analysis::tokenizer::DEFAULT_STRIP_CHARS;
use crate::cli::{Args, Command};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".tally.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Word counter settings.
    #[serde(default)]
    pub counter: CounterConfig,

    /// Leaderboard settings.
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Word counter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Characters trimmed from both ends of every word.
    #[serde(default = "default_strip_chars")]
    pub strip_chars: String,

    /// Fold words to lowercase before counting.
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Number of most common words to show.
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            strip_chars: default_strip_chars(),
            lowercase: true,
            top: default_top(),
        }
    }
}

fn default_strip_chars() -> String {
    DEFAULT_STRIP_CHARS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_top() -> usize {
    1
}

/// Leaderboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Category to rank.
    #[serde(default = "default_category")]
    pub category: String,

    /// Maximum number of users to show.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Prefix printed before every total.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Decimal places printed for totals.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            limit: default_limit(),
            currency: default_currency(),
            precision: default_precision(),
        }
    }
}

fn default_category() -> String {
    "UK".to_string()
}

fn default_limit() -> usize {
    3
}

fn default_currency() -> String {
    "£".to_string()
}

fn default_precision() -> usize {
    2
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from `dir`.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &Args) {
        match &args.command {
            Command::Count(count) => {
                if let Some(top) = count.top {
                    self.counter.top = top;
                }
                if count.keep_case {
                    self.counter.lowercase = false;
                }
            }
            Command::Leaderboard(board) => {
                if let Some(ref category) = board.category {
                    self.leaderboard.category = category.trim().to_string();
                }
                if let Some(limit) = board.limit {
                    self.leaderboard.limit = limit;
                }
            }
            Command::Max(_) | Command::Repeat(_) | Command::InitConfig => {}
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CountArgs, LeaderboardArgs};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.counter.strip_chars, ".,!?");
        assert!(config.counter.lowercase);
        assert_eq!(config.leaderboard.category, "UK");
        assert_eq!(config.leaderboard.limit, 3);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[counter]
lowercase = false
top = 5

[leaderboard]
category = "FR"
currency = "EUR "
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert!(!config.counter.lowercase);
        assert_eq!(config.counter.top, 5);
        assert_eq!(config.counter.strip_chars, ".,!?");
        assert_eq!(config.leaderboard.category, "FR");
        assert_eq!(config.leaderboard.currency, "EUR ");
        assert_eq!(config.leaderboard.limit, 3);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[counter]"));
        assert!(toml_str.contains("[leaderboard]"));

        let round: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(round.leaderboard.currency, "£");
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[leaderboard]\nlimit = 7\n").unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.leaderboard.limit, 7);

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[leaderboard\n").unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let args = Args {
            config: None,
            verbose: true,
            quiet: false,
            command: Command::Leaderboard(LeaderboardArgs {
                category: Some(" FR ".to_string()),
                limit: Some(10),
                ..LeaderboardArgs::default()
            }),
        };

        config.merge_with_args(&args);
        assert_eq!(config.leaderboard.category, "FR");
        assert_eq!(config.leaderboard.limit, 10);
        assert!(config.general.verbose);
    }

    #[test]
    fn test_merge_keeps_config_when_flags_absent() {
        let mut config = Config::default();
        config.counter.top = 4;
        let args = Args {
            config: None,
            verbose: false,
            quiet: false,
            command: Command::Count(CountArgs::default()),
        };

        config.merge_with_args(&args);
        assert_eq!(config.counter.top, 4);
        assert!(config.counter.lowercase);
    }
}
