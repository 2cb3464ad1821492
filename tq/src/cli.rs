//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::error::TaskQueueError;

/// tq - binary-heap task queue
#[derive(Parser, Debug)]
#[command(
    name = "tq",
    about = "Binary-heap priority queue for scheduling tasks",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Heap-sort a list of integers
    Sort {
        /// Integers to sort; each argument may hold several space-separated values
        #[arg(required = true, allow_hyphen_values = true, value_name = "VALUES")]
        values: Vec<String>,
    },

    /// Run the scheduling walkthrough over the configured tasks
    Demo,
}

/// Parse sort arguments into integers
///
/// Each argument is split on whitespace, so `tq sort "3 1 2"` and
/// `tq sort 3 1 2` are equivalent.
pub fn parse_values(args: &[String]) -> Result<Vec<i64>, TaskQueueError> {
    debug!(count = args.len(), "parse_values: called");
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(|token| {
            token.parse::<i64>().map_err(|source| TaskQueueError::InvalidNumber {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_values_separate_args() {
        assert_eq!(parse_values(&args(&["3", "1", "2"])).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_values_space_separated() {
        assert_eq!(parse_values(&args(&["12 11  13", "-5"])).unwrap(), vec![12, 11, 13, -5]);
    }

    #[test]
    fn test_parse_values_blank_is_empty() {
        assert!(parse_values(&args(&["   "])).unwrap().is_empty());
    }

    #[test]
    fn test_parse_values_rejects_garbage() {
        let err = parse_values(&args(&["1 two 3"])).unwrap_err();
        match err {
            TaskQueueError::InvalidNumber { token, .. } => assert_eq!(token, "two"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_sort_with_negative() {
        let cli = Cli::try_parse_from(["tq", "sort", "-3", "4"]).unwrap();
        match cli.command {
            Command::Sort { values } => assert_eq!(values, vec!["-3", "4"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_sort_list_starting_negative() {
        let cli = Cli::try_parse_from(["tq", "sort", "-1 3 2"]).unwrap();
        match cli.command {
            Command::Sort { values } => {
                assert_eq!(values, vec!["-1 3 2"]);
                assert_eq!(parse_values(&values).unwrap(), vec![-1, 3, 2]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_hyphen_garbage_reaches_parser() {
        let cli = Cli::try_parse_from(["tq", "sort", "-x"]).unwrap();
        match cli.command {
            Command::Sort { values } => match parse_values(&values).unwrap_err() {
                TaskQueueError::InvalidNumber { token, .. } => assert_eq!(token, "-x"),
                other => panic!("unexpected error: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["tq", "demo", "--log-level", "debug", "-c", "x.yml"]).unwrap();
        assert!(matches!(cli.command, Command::Demo));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("x.yml")));
    }
}
