//! taskqueue - binary-heap priority queue for task scheduling
//!
//! Orders tasks by a mutable priority where lower values are served first.
//! The queue supports insertion, minimum extraction and in-place priority
//! adjustment, restoring the heap property with a single sift-up or
//! sift-down after each change.
//!
//! # Modules
//!
//! - [`queue`] - the [`PriorityQueue`] and the [`Schedulable`] payload trait
//! - [`domain`] - the [`Task`] payload, [`TaskId`] and [`Priority`]
//! - [`sort`] - flat-array heap sort
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use taskqueue::{Priority, PriorityQueue, Task, TaskId};
//!
//! let now = Utc::now();
//! let mut queue = PriorityQueue::new();
//! queue.insert(Task::new(1u64, 3i64, now, now));
//! queue.insert(Task::new(2u64, 1i64, now, now));
//!
//! assert!(queue.decrease_key(&TaskId::new(1), Priority::new(0)));
//! assert_eq!(queue.extract_min().map(|t| t.id), Some(TaskId::new(1)));
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod queue;
pub mod sort;

pub use config::{Adjustment, Config, DemoConfig, LoadedConfig};
pub use domain::{Priority, Task, TaskId};
pub use error::TaskQueueError;
pub use queue::{PriorityQueue, Schedulable};
pub use sort::{heap_sort, heap_sort_in_place};
