//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Tally - word counts, leaderboards and other small ranking tools
///
/// Count words, rank spenders by category, find maxima and repeat text.
/// Rankings are deterministic: higher values first, ties broken
/// alphabetically.
///
/// Examples:
///   tally count "The cat in the hat sat on the cat. Poor cat." --word the --word cat
///   tally count --file notes.txt --top 10
///   tally leaderboard --category UK --limit 3 --fee alice=0.25
///   tally max --a 1 --b 2 --list 4 9 2
///   tally repeat --times 3 --uppercase
///   tally init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, looks for .tally.toml in the current directory
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available tools.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count word frequencies and show the most common words
    Count(CountArgs),
    /// Rank users by total spend within one category
    Leaderboard(LeaderboardArgs),
    /// Find the maximum of some numbers
    Max(MaxArgs),
    /// Print a text several times
    Repeat(RepeatArgs),
    /// Generate a default .tally.toml configuration file
    InitConfig,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CountArgs {
    /// Text to analyze; read from --file or stdin when omitted
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Number of most common words to show
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Print the count of a specific word (repeatable)
    #[arg(short, long, value_name = "WORD")]
    pub word: Vec<String>,

    /// Count words case-sensitively
    #[arg(long)]
    pub keep_case: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct LeaderboardArgs {
    /// Read `user,category,amount` lines from a file instead of the demo data
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Category to rank (exact, case-sensitive)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Maximum number of users to show
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Add a fee to a user's total, e.g. --fee alice=0.25 (repeatable)
    #[arg(long, value_name = "USER=AMOUNT")]
    pub fee: Vec<Fee>,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct MaxArgs {
    /// First number for the pairwise maximum
    #[arg(long, allow_negative_numbers = true, requires = "b")]
    pub a: Option<f64>,

    /// Second number for the pairwise maximum
    #[arg(long, allow_negative_numbers = true, requires = "a")]
    pub b: Option<f64>,

    /// A list of numbers
    #[arg(long, num_args = 1.., allow_negative_numbers = true, value_name = "X")]
    pub list: Option<Vec<f64>>,

    /// A variable-length list of numbers
    #[arg(long, num_args = 1.., allow_negative_numbers = true, value_name = "X")]
    pub varargs: Option<Vec<f64>>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RepeatArgs {
    /// Number of repetitions (at least 1)
    #[arg(short, long, allow_negative_numbers = true, value_name = "N")]
    pub times: i64,

    /// Uppercase the text before repeating it
    #[arg(short, long)]
    pub uppercase: bool,

    /// Text to repeat
    #[arg(long, default_value = crate::tools::repeat::DEFAULT_TEXT)]
    pub text: String,
}

/// Output format for rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

/// A `user=amount` fee given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Fee {
    pub key: String,
    pub amount: f64,
}

impl FromStr for Fee {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("expected USER=AMOUNT, got '{}'", s))?;

        let key = key.trim();
        if key.is_empty() {
            return Err("fee user must be non-empty".to_string());
        }

        let amount = amount
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("fee amount '{}' is not a number", amount.trim()))?;

        Ok(Fee {
            key: key.to_string(),
            amount,
        })
    }
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match &self.command {
            Command::Count(count) => {
                if let Some(ref path) = count.file {
                    if !path.is_file() {
                        return Err(format!("Input file does not exist: {}", path.display()));
                    }
                }
            }
            Command::Leaderboard(board) => {
                if let Some(ref path) = board.file {
                    if !path.is_file() {
                        return Err(format!("Input file does not exist: {}", path.display()));
                    }
                }
                if let Some(ref category) = board.category {
                    if category.trim().is_empty() {
                        return Err("--category must be non-empty".to_string());
                    }
                }
            }
            Command::Max(max) => {
                if max.a.is_none() && max.list.is_none() && max.varargs.is_none() {
                    return Err("Provide --a and --b, --list or --varargs".to_string());
                }
            }
            Command::Repeat(repeat) => {
                if repeat.times < 1 {
                    return Err("--times must be at least 1".to_string());
                }
            }
            Command::InitConfig => {}
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
