//! Public Suffix List generator
//!
//! Downloads the Public Suffix List and writes its full-match, exception
//! and wildcard rules as static array initializers.

mod error;
mod fetch;
mod output;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::LevelFilter;

use psl_core::RuleCategory;

use error::GenResult;
use fetch::{fetch_list, read_list, DEFAULT_LIST_URL};
use output::generate;

#[derive(Parser, Debug)]
#[command(name = "psl-gen")]
#[command(about = "Generate static Public Suffix List tables")]
struct Cli {
    /// Output file for the generated initializers
    output: PathBuf,

    /// List URL to download
    #[arg(long, default_value = DEFAULT_LIST_URL)]
    url: String,

    /// Read the list from a local file instead of downloading it
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Network timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> GenResult<()> {
    let start = Instant::now();

    let text = match &cli.input {
        Some(path) => read_list(path)?,
        None => fetch_list(&cli.url, Duration::from_secs(cli.timeout_secs))?,
    };

    let (rules, stats) = generate(&text, &cli.output)?;

    log::info!(
        "Wrote {} full, {} exception, {} wildcard rules to '{}' in {:.1}ms",
        stats.full_match,
        stats.exception,
        stats.wildcard,
        cli.output.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    log::debug!(
        "  Lines: {} ({} retained, {} bare '*' dropped)",
        stats.lines,
        stats.retained(),
        stats.dropped_bare_wildcard
    );

    for category in RuleCategory::ALL {
        log::debug!("  {}: {}", category.name(), rules.get(category).len());
    }

    Ok(())
}
