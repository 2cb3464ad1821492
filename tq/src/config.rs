//! Configuration types and loading

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Priority, Task, TaskId};
use crate::error::TaskQueueError;

/// Main tq configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,

    /// Scheduling walkthrough used by `tq demo`
    pub demo: DemoConfig,
}

/// A configuration together with where it came from
///
/// Loading runs before logging is set up, so nothing is logged here. The
/// caller reports `source` and `skipped` once a subscriber exists.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,

    /// File the configuration was read from, `None` for defaults
    pub source: Option<PathBuf>,

    /// Fallback files that existed but failed to load
    pub skipped: Vec<TaskQueueError>,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// An explicit path must load. Otherwise `.tq.yml` in the working
    /// directory, then `<config_dir>/taskqueue/tq.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<LoadedConfig, TaskQueueError> {
        if let Some(path) = config_path {
            let config = Self::load_from_file(path)?;
            return Ok(LoadedConfig {
                config,
                source: Some(path.clone()),
                skipped: Vec::new(),
            });
        }

        let mut candidates = vec![PathBuf::from(".tq.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("taskqueue").join("tq.yml"));
        }
        Ok(Self::load_first(candidates))
    }

    /// First candidate that exists and parses wins; broken ones are skipped
    fn load_first(candidates: impl IntoIterator<Item = PathBuf>) -> LoadedConfig {
        let mut skipped = Vec::new();
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path),
                        skipped,
                    };
                }
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: None,
            skipped,
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TaskQueueError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TaskQueueError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|source| TaskQueueError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }
}

/// Tasks and key adjustments replayed by `tq demo`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub tasks: Vec<Task>,
    pub decrease: Adjustment,
    pub increase: Adjustment,
}

/// A priority change aimed at one task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub id: TaskId,
    pub priority: Priority,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tasks: default_tasks(),
            decrease: Adjustment {
                id: TaskId::new(1),
                priority: Priority::new(0),
            },
            increase: Adjustment {
                id: TaskId::new(3),
                priority: Priority::new(6),
            },
        }
    }
}

fn default_tasks() -> Vec<Task> {
    let epoch = DateTime::<Utc>::UNIX_EPOCH;
    [(1u64, 3i64, 0i64, 10i64), (2, 1, 1, 5), (3, 2, 2, 8), (4, 5, 3, 12), (5, 4, 4, 15)]
        .into_iter()
        .map(|(id, priority, arrival, deadline)| {
            Task::new(
                id,
                priority,
                epoch + Duration::seconds(arrival),
                epoch + Duration::seconds(deadline),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.log_level.is_none());
        assert_eq!(config.demo.tasks.len(), 5);
        assert_eq!(config.demo.decrease.id, TaskId::new(1));
        assert_eq!(config.demo.decrease.priority, Priority::new(0));
        assert_eq!(config.demo.increase.id, TaskId::new(3));
        assert_eq!(config.demo.increase.priority, Priority::new(6));
    }

    #[test]
    fn test_default_tasks_match_walkthrough() {
        let priorities: Vec<i64> = default_tasks().iter().map(|t| t.priority.value()).collect();
        assert_eq!(priorities, vec![3, 1, 2, 5, 4]);

        let second = &default_tasks()[1];
        assert_eq!(second.id, TaskId::new(2));
        assert_eq!(second.deadline - second.arrival_time, Duration::seconds(4));
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: debug
demo:
  tasks:
    - id: 10
      priority: 7
      arrival-time: 2024-01-01T00:00:00Z
      deadline: 2024-01-02T00:00:00Z
      description: nightly build
  decrease:
    id: 10
    priority: 1
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.demo.tasks.len(), 1);
        assert_eq!(config.demo.tasks[0].description, "nightly build");
        assert_eq!(config.demo.decrease.id, TaskId::new(10));
        // Unspecified fields keep their defaults
        assert_eq!(config.demo.increase.id, TaskId::new(3));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log-level: trace").unwrap();

        let path = file.path().to_path_buf();
        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.config.log_level.as_deref(), Some("trace"));
        assert_eq!(loaded.source, Some(path));
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let path = PathBuf::from("/nonexistent/tq.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, TaskQueueError::Io { .. }));
    }

    #[test]
    fn test_load_explicit_path_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "demo: [not, a, map]").unwrap();

        let err = Config::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, TaskQueueError::Config { .. }));
    }

    #[test]
    fn test_load_first_skips_broken_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.yml");
        let good = dir.path().join("good.yml");
        std::fs::write(&broken, "demo: [not, a, map]\n").unwrap();
        std::fs::write(&good, "log-level: info\n").unwrap();

        let loaded = Config::load_first([dir.path().join("missing.yml"), broken.clone(), good.clone()]);

        assert_eq!(loaded.config.log_level.as_deref(), Some("info"));
        assert_eq!(loaded.source, Some(good));
        assert_eq!(loaded.skipped.len(), 1);
        match &loaded.skipped[0] {
            TaskQueueError::Config { path, .. } => assert_eq!(path, &broken),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_first([dir.path().join("missing.yml")]);

        assert!(loaded.source.is_none());
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.config.demo.tasks.len(), 5);
    }
}
