//! Domain types for task scheduling

mod id;
mod priority;
mod task;

pub use id::TaskId;
pub use priority::Priority;
pub use task::Task;
