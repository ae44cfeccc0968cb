// File: src/model.rs
use anyhow::{Result, bail};
use std::collections::HashSet;
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Work track a task belongs to. Determines bar color and legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Category {
    Frontend,
    Backend,
    DevOps,
    Testing,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Frontend => write!(f, "Frontend"),
            Category::Backend => write!(f, "Backend"),
            Category::DevOps => write!(f, "DevOps"),
            Category::Testing => write!(f, "Testing"),
        }
    }
}

/// One scheduled task: a horizontal bar on the chart.
/// Weeks are 1-based; a one-week task sits centered on its week number.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: String,
    pub start_week: u32,
    pub duration: u32,
    pub category: Category,
    pub description: String,
}

impl Task {
    pub fn new(
        name: &str,
        start_week: u32,
        duration: u32,
        category: Category,
        description: &str,
    ) -> Self {
        Task {
            name: name.to_string(),
            start_week,
            duration,
            category,
            description: description.to_string(),
        }
    }
}

/// A point-in-time marker drawn as a diamond on its task's row.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub week: f64,
    pub task: String,
    pub label: String,
}

impl Milestone {
    pub fn new(week: f64, task: &str, label: &str) -> Self {
        Milestone {
            week,
            task: task.to_string(),
            label: label.to_string(),
        }
    }
}

/// The whole chart input: title, tasks in row order (first task is the top
/// row) and milestones.
#[derive(Debug, Clone)]
pub struct Plan {
    pub title: String,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
}

impl Plan {
    /// Row index of a task by name, in declaration order.
    pub fn row_of(&self, task_name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name == task_name)
    }

    pub fn rows(&self) -> usize {
        self.tasks.len()
    }

    /// Categories that actually appear in the plan, in declaration order of
    /// the enum. This is what keeps the legend free of duplicate entries.
    pub fn categories(&self) -> Vec<Category> {
        Category::iter()
            .filter(|c| self.tasks.iter().any(|t| t.category == *c))
            .collect()
    }

    /// Rejects plans the renderer cannot draw sensibly.
    pub fn validate(&self) -> Result<()> {
        if self.tasks.is_empty() {
            bail!("Plan has no tasks");
        }
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.start_week == 0 {
                bail!("Task '{}' starts at week 0; weeks are 1-based", task.name);
            }
            if task.duration == 0 {
                bail!("Task '{}' has zero duration", task.name);
            }
            if !seen.insert(task.name.as_str()) {
                bail!("Duplicate task name '{}'", task.name);
            }
        }
        for milestone in &self.milestones {
            if self.row_of(&milestone.task).is_none() {
                bail!(
                    "Milestone '{}' references unknown task '{}'",
                    milestone.label,
                    milestone.task
                );
            }
        }
        Ok(())
    }
}
