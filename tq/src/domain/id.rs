//! Task identity

use serde::{Deserialize, Serialize};

use crate::error::TaskQueueError;

/// Stable identity of a task
///
/// Uniqueness within a queue is the caller's responsibility; the queue only
/// compares ids for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Create an id from its raw value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw id value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = TaskQueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TaskQueueError::InvalidTaskId(s.to_string()))
    }
}
