//! Binary-heap priority queue
//!
//! Entries are kept in a dense `Vec` arranged as a min-heap on their
//! priority. Every structural operation introduces at most one violation of
//! the heap property and repairs it with a single sift-up or sift-down.

mod entry;
mod heap;

pub use entry::Schedulable;
pub use heap::{Iter, PriorityQueue};
