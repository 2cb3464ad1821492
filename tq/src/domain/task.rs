//! Task payload carried by the priority queue

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskId};
use crate::queue::Schedulable;

/// A unit of work with scheduling metadata
///
/// Only `id` and `priority` matter to the queue. Arrival time, deadline and
/// description are carried for the caller and never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Task {
    pub id: TaskId,
    pub priority: Priority,
    pub arrival_time: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Create a new task with an empty description
    pub fn new(
        id: impl Into<TaskId>,
        priority: impl Into<Priority>,
        arrival_time: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            priority: priority.into(),
            arrival_time,
            deadline,
            description: String::new(),
        }
    }

    /// Attach a free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task(id={}, priority={}, desc='{}')",
            self.id, self.priority, self.description
        )
    }
}

impl Schedulable for Task {
    type Id = TaskId;
    type Priority = Priority;

    fn id(&self) -> &TaskId {
        &self.id
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new(1u64, 3i64, epoch(), epoch() + Duration::seconds(10));
        assert_eq!(task.id, TaskId::new(1));
        assert_eq!(task.priority, Priority::new(3));
        assert!(task.description.is_empty());
    }

    #[test]
    fn test_task_display() {
        let task = Task::new(2u64, 1i64, epoch(), epoch()).with_description("compile");
        assert_eq!(task.to_string(), "Task(id=2, priority=1, desc='compile')");
    }

    #[test]
    fn test_task_schedulable() {
        let mut task = Task::new(9u64, 4i64, epoch(), epoch());
        assert_eq!(*Schedulable::id(&task), TaskId::new(9));
        task.set_priority(Priority::new(-1));
        assert_eq!(Schedulable::priority(&task), Priority::new(-1));
    }

    #[test]
    fn test_task_deserialize_without_description() {
        let yaml = r#"
id: 4
priority: 5
arrival-time: 1970-01-01T00:00:03Z
deadline: 1970-01-01T00:00:12Z
"#;
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.id, TaskId::new(4));
        assert_eq!(task.priority, Priority::new(5));
        assert_eq!(task.deadline, epoch() + Duration::seconds(12));
        assert_eq!(task.description, "");
    }
}
