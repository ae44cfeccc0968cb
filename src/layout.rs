// File: src/layout.rs

// Pure chart geometry in week/row units. This file intentionally has NO
// dependency on the rendering crate so the math stays testable without a
// drawing backend.

use crate::model::{Plan, Task};

/// Bars are half a row tall, centered on their row.
pub const BAR_HALF_HEIGHT: f64 = 0.25;

/// Maps a row index (0 = first declared task) to its y coordinate.
/// The y axis grows upward, so the first task lands on the top row.
pub fn row_y(row: usize, rows: usize) -> f64 {
    debug_assert!(row < rows);
    (rows - 1 - row) as f64
}

/// Horizontal extent of a task bar. A task starting at week `w` begins at
/// `w - 0.5`, so a one-week task sits centered on its week number.
pub fn bar_span(task: &Task) -> (f64, f64) {
    let x0 = task.start_week as f64 - 0.5;
    (x0, x0 + task.duration as f64)
}

/// Week-axis range: half a week of headroom past the latest bar end or
/// milestone, whichever is further right.
pub fn x_range(plan: &Plan) -> (f64, f64) {
    let bar_ends = plan.tasks.iter().map(|t| bar_span(t).1);
    let marks = plan.milestones.iter().map(|m| m.week);
    let max = bar_ends.chain(marks).fold(0.5, f64::max);
    (0.5, max + 0.5)
}

/// Integer week positions that get a "Week N" tick label.
pub fn week_ticks(plan: &Plan) -> Vec<f64> {
    let (_, x_max) = x_range(plan);
    (1..=(x_max - 0.5).floor() as u32).map(f64::from).collect()
}

/// A dependency arrow between two points in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub tail: (f64, f64),
    pub head: (f64, f64),
}

/// One arrow per adjacent task pair: from the end of bar `i` to the start of
/// bar `i + 1`, each at its own row center.
pub fn dependency_arrows(tasks: &[Task], rows: usize) -> Vec<Arrow> {
    tasks
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Arrow {
            tail: (bar_span(&pair[0]).1, row_y(i, rows)),
            head: (bar_span(&pair[1]).0, row_y(i + 1, rows)),
        })
        .collect()
}
