use std::io::stderr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_normalizer::config::Settings;
use transaction_normalizer::engine::Pipeline;

#[derive(Parser, Debug)]
#[command(name = "transaction-normalizer")]
#[command(about = "Normalize heterogeneous JSON transaction feeds into transactions and details CSV tables", long_about = None)]
struct Args {
    /// JSON documents to process, in order (defaults to `files.input` from the configuration)
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Alias and output configuration (TOML)
    #[arg(short, long, value_name = "PATH", default_value = "config.toml")]
    config: PathBuf,

    /// Transactions table path (overrides `files.transaction_output`)
    #[arg(long, value_name = "PATH")]
    transactions: Option<PathBuf>,

    /// Details table path (overrides `files.details_output`)
    #[arg(long, value_name = "PATH")]
    details: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Exit with a failure status when any record was rejected
    #[arg(long)]
    strict: bool
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let settings = Settings::load(&args.config)
        .with_context(|| format!("Failed to load configuration [{}]", args.config.display()))?;

    let inputs = if args.inputs.is_empty() { settings.files.input.clone() } else { args.inputs.clone() };

    if inputs.is_empty() {
        eprintln!("No input documents given on the command line or in [files].input");
        return Ok(ExitCode::FAILURE);
    }

    let transaction_path = args.transactions.clone().unwrap_or_else(|| settings.files.transaction_output.clone());
    let details_path = args.details.clone().unwrap_or_else(|| settings.files.details_output.clone());

    let timer = Instant::now();
    let report = Pipeline::new(&settings).run_files(&inputs, &transaction_path, &details_path)?;
    let duration = timer.elapsed();

    info!(
        "Exported {} transactions and {} details ({} duplicates, {} rejected) in: {duration:?}",
        report.accepted,
        report.details,
        report.duplicates,
        report.rejected.len()
    );

    if args.strict && !report.rejected.is_empty() {
        warn!("{} records were rejected", report.rejected.len());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
