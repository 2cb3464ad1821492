//! Priority values for task scheduling

use serde::{Deserialize, Serialize};

use crate::error::TaskQueueError;

/// Scheduling priority of a task
///
/// Lower values are more urgent: a task with priority `0` is served before
/// one with priority `5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Priority(i64);

impl Priority {
    /// Create a priority from its raw value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw priority value
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Priority {
    type Err = TaskQueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TaskQueueError::InvalidPriority(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::new(0) < Priority::new(1));
        assert!(Priority::new(-3) < Priority::new(0));
        assert_eq!(Priority::new(7), Priority::from(7));
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::new(42).to_string(), "42");
        assert_eq!(Priority::new(-1).to_string(), "-1");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("3".parse::<Priority>().unwrap(), Priority::new(3));
        assert_eq!(" -2 ".parse::<Priority>().unwrap(), Priority::new(-2));
        assert!("high".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_serde() {
        let json = serde_json::to_string(&Priority::new(5)).unwrap();
        assert_eq!(json, "5");

        let priority: Priority = serde_json::from_str("12").unwrap();
        assert_eq!(priority, Priority::new(12));
    }
}
