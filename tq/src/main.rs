//! tq - binary-heap task queue
//!
//! CLI entry point for heap-sorting integers and replaying the scheduling
//! walkthrough.

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use taskqueue::cli::{Cli, Command, parse_values};
use taskqueue::config::Config;
use taskqueue::{demo, heap_sort};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (WARN)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load once before logging exists; report the outcome after setup
    let loaded = Config::load(cli.config.as_ref());
    let config_log_level = loaded.as_ref().ok().and_then(|l| l.config.log_level.clone());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let loaded = loaded.context("Failed to load configuration")?;
    for skipped in &loaded.skipped {
        let cause = std::error::Error::source(skipped).map(|e| e.to_string()).unwrap_or_default();
        warn!("{}: {}", skipped, cause);
    }
    match &loaded.source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }
    let config = loaded.config;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Sort { values } => cmd_sort(&values),
        Command::Demo => cmd_demo(&config),
    }
}

/// Heap-sort the given integers and print them space-separated
fn cmd_sort(values: &[String]) -> Result<()> {
    debug!(?values, "cmd_sort: called");
    let numbers = parse_values(values).context("Failed to parse values")?;
    let sorted = heap_sort(numbers);
    let line = sorted.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
    println!("{}", line);
    Ok(())
}

/// Replay the scheduling walkthrough on stdout
fn cmd_demo(config: &Config) -> Result<()> {
    debug!(tasks = config.demo.tasks.len(), "cmd_demo: called");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&config.demo, &mut out).context("Failed to write demo output")?;
    Ok(())
}
