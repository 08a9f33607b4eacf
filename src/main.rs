//! Tally - word counts, leaderboards and other small ranking tools
//!
//! A CLI built around one reusable core: keyed ledgers that accumulate
//! totals and rank them deterministically (highest value first, ties
//! broken alphabetically).
//!
//! Exit codes:
//!   0 - Success
//!   1 - Invalid arguments or runtime error (bad input, empty ledger, etc.)
//!   2 - Command-line usage error reported by clap

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod records;
mod report;
mod tools;

use analysis::{best, build_filtered_ledger, count_words, ranked, TokenizeOptions};
use anyhow::{Context, Result};
use cli::{Args, Command, CountArgs, LeaderboardArgs, MaxArgs, OutputFormat, RepeatArgs};
use config::{Config, CONFIG_FILE_NAME};
use models::Entry;
use report::RankingReport;
use std::io::Read;
use std::path::Path;
use tools::numbers::{max_2, max_list, max_variable};
use tools::repeat::repeat_text;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Load configuration, set up logging and dispatch the subcommand.
fn run(args: Args) -> Result<()> {
    // init-config must work even when the existing config is broken
    if let Command::InitConfig = args.command {
        return handle_init_config();
    }

    let (mut config, source) = load_config(&args)?;
    config.merge_with_args(&args);

    init_logging(&args, &config);

    info!("Tally v{}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration source: {}", source);
    debug!("Arguments: {:?}", args);

    match &args.command {
        Command::Count(count) => run_count(count, &config),
        Command::Leaderboard(board) => run_leaderboard(board, &config),
        Command::Max(max) => run_max(max),
        Command::Repeat(repeat) => run_repeat(repeat),
        // Handled above, before config loading.
        Command::InitConfig => Ok(()),
    }
}

/// Handle init-config: generate a default .tally.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so stdout only carries the computed result.
/// `RUST_LOG` directives, when set, refine the flag-derived level.
fn init_logging(args: &Args, config: &Config) {
    let level = if !args.quiet && config.general.verbose {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging was already initialized");
    }
}

/// Load configuration from file or use defaults.
///
/// Returns the configuration and a description of where it came from.
fn load_config(args: &Args) -> Result<(Config, String)> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        let config = Config::load(config_path)?;
        return Ok((config, config_path.display().to_string()));
    }

    // Try default location
    match Config::load_from_dir(Path::new(".")) {
        Ok(Some(config)) => Ok((config, CONFIG_FILE_NAME.to_string())),
        Ok(None) => Ok((Config::default(), "defaults".to_string())),
        Err(e) => {
            eprintln!("Warning: ignoring {}: {:#}", CONFIG_FILE_NAME, e);
            Ok((Config::default(), "defaults".to_string()))
        }
    }
}

/// Read the text to analyze: positional argument, then --file, then stdin.
fn read_text(count: &CountArgs) -> Result<String> {
    if let Some(ref text) = count.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = count.file {
        info!("Reading text from {}", path.display());
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    debug!("Reading text from stdin");
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

/// Count words and print lookups plus the top ranking.
fn run_count(count: &CountArgs, config: &Config) -> Result<()> {
    let text = read_text(count)?;
    let options = TokenizeOptions {
        strip_chars: config.counter.strip_chars.clone(),
        lowercase: config.counter.lowercase,
    };

    let counter = count_words(&text, &options)?;
    if let Some(total) = counter.total() {
        info!("Counted {} words ({} distinct)", total, counter.len());
    }

    let lookups: Vec<Entry<i64>> = count
        .word
        .iter()
        .map(|word| {
            let key = if options.lowercase {
                word.to_lowercase()
            } else {
                word.clone()
            };
            let value = counter.value_of(&key);
            Entry::new(key, value)
        })
        .collect();

    // `best` is the emptiness check: an empty ledger is an error only when
    // a ranking was requested, lookups alone never fail.
    if config.counter.top > 0 {
        let winner = best(&counter)?;
        debug!("Most common word: {}", winner);
    }

    let top = config.counter.top;
    let report = RankingReport::new("word frequency", top, ranked(&counter, top))
        .with_lookups(lookups);

    let output = match count.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Text => report::generate_text_report(&report, |v| *v),
    };
    print!("{}", output);
    Ok(())
}

/// Build the category leaderboard and print it.
fn run_leaderboard(board: &LeaderboardArgs, config: &Config) -> Result<()> {
    let settings = &config.leaderboard;

    let records = match board.file {
        Some(ref path) => {
            info!("Reading records from {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            records::parse_records(content.lines())
                .with_context(|| format!("Failed to read records from {}", path.display()))?
        }
        None => {
            debug!("Using built-in demo records");
            // Explicit --fee flags replace the demo fee.
            records::demo_records(board.fee.is_empty())?
        }
    };

    let mut totals = build_filtered_ledger(&records, &settings.category)?;
    if totals.is_empty() {
        warn!("No records matched category '{}'", settings.category);
    }

    for fee in &board.fee {
        if !totals.contains(&fee.key) {
            warn!(
                "Cannot apply fee: '{}' has no purchases in '{}'",
                fee.key, settings.category
            );
        }
        totals.adjust(&fee.key, fee.amount)?;
        debug!("Applied fee {} to {}", fee.amount, fee.key);
    }

    let limit = settings.limit;
    let report = RankingReport::new("leaderboard", limit, ranked(&totals, limit))
        .with_category(settings.category.clone());

    let output = match board.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Text => report::generate_text_report(&report, |v| {
            report::format_money(*v, &settings.currency, settings.precision)
        }),
    };
    print!("{}", output);
    Ok(())
}

/// Print the maximum for every form of input that was supplied.
fn run_max(max: &MaxArgs) -> Result<()> {
    if let (Some(a), Some(b)) = (max.a, max.b) {
        println!("max_2({}, {}) = {}", a, b, max_2(a, b));
    }
    if let Some(ref list) = max.list {
        println!("max_list({:?}) = {}", list, max_list(list)?);
    }
    if let Some(ref varargs) = max.varargs {
        println!("max_variable({:?}) = {}", varargs, max_variable(varargs)?);
    }
    Ok(())
}

fn run_repeat(repeat: &RepeatArgs) -> Result<()> {
    let output = repeat_text(&repeat.text, repeat.times, repeat.uppercase)?;
    print!("{}", output);
    Ok(())
}
