//! Scheduling walkthrough driven by the `tq demo` command
//!
//! Plays the part of a scheduler loop: it owns the tasks, hands them to a
//! [`PriorityQueue`], adjusts two priorities by identity, then drains the
//! queue, reporting the heap after every step.

use std::io::{self, Write};

use colored::*;
use tracing::debug;

use crate::config::{Adjustment, DemoConfig};
use crate::domain::Task;
use crate::queue::PriorityQueue;

/// What happened during a walkthrough
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoOutcome {
    /// The first task extracted after all inserts
    pub first: Option<Task>,
    /// Whether the decrease adjustment was applied
    pub decreased: bool,
    /// Whether the increase adjustment was applied
    pub increased: bool,
    /// Remaining tasks in the order they were drained
    pub drained: Vec<Task>,
}

/// Run the walkthrough, writing the report to `out`
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> io::Result<DemoOutcome> {
    debug!(tasks = config.tasks.len(), "demo::run: called");
    let mut queue: PriorityQueue<Task> = PriorityQueue::with_capacity(config.tasks.len());
    let mut outcome = DemoOutcome::default();

    for task in &config.tasks {
        queue.insert(task.clone());
    }
    print_queue(out, "Priority Queue after inserting tasks:", &queue)?;

    outcome.first = queue.extract_min();
    match &outcome.first {
        Some(task) => writeln!(
            out,
            "\n{} Task ID: {}, Priority: {}",
            "Extracted task with min priority:".green(),
            task.id,
            task.priority
        )?,
        None => writeln!(out, "\n{}", "Queue is empty, nothing to extract".yellow())?,
    }
    print_queue(out, "\nPriority Queue after extracting min task:", &queue)?;

    outcome.decreased = adjust(out, &mut queue, config.decrease, Direction::Decrease)?;
    print_queue(out, "\nPriority Queue after decreasing key:", &queue)?;

    outcome.increased = adjust(out, &mut queue, config.increase, Direction::Increase)?;
    print_queue(out, "\nPriority Queue after increasing key:", &queue)?;

    writeln!(out, "\n{}", "Extracting all tasks:".bold())?;
    while let Some(task) = queue.extract_min() {
        writeln!(out, "Task ID: {}, Priority: {}", task.id, task.priority)?;
        outcome.drained.push(task);
    }

    Ok(outcome)
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Decrease,
    Increase,
}

fn adjust<W: Write>(
    out: &mut W,
    queue: &mut PriorityQueue<Task>,
    adjustment: Adjustment,
    direction: Direction,
) -> io::Result<bool> {
    let (verb, applied) = match direction {
        Direction::Decrease => ("Decreasing", queue.decrease_key(&adjustment.id, adjustment.priority)),
        Direction::Increase => ("Increasing", queue.increase_key(&adjustment.id, adjustment.priority)),
    };
    writeln!(
        out,
        "\n{} priority of Task ID: {} to {}",
        verb, adjustment.id, adjustment.priority
    )?;
    if !applied {
        writeln!(out, "{}", "Adjustment rejected".yellow())?;
    }
    Ok(applied)
}

fn print_queue<W: Write>(out: &mut W, title: &str, queue: &PriorityQueue<Task>) -> io::Result<()> {
    writeln!(out, "{}", title.bold())?;
    for task in queue {
        writeln!(out, "Task ID: {}, Priority: {}", task.id, task.priority)?;
    }
    Ok(())
}
