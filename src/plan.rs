// File: src/plan.rs
// The compiled-in six-week MVP plan. Editing these tables is the only way to
// change what gets drawn; there is deliberately no config surface.
use crate::model::{Category, Milestone, Plan, Task};
use once_cell::sync::Lazy;

static MVP_PLAN: Lazy<Plan> = Lazy::new(|| Plan {
    title: "6-Week MVP Development Plan".to_string(),
    tasks: vec![
        Task::new("Village Render", 1, 1, Category::Frontend, "Phaser.js setup"),
        Task::new("RPG Dialogue", 2, 1, Category::Frontend, "UI panel system"),
        Task::new("MCP Integration", 3, 1, Category::Backend, "Real agents"),
        Task::new("Bug Bot System", 4, 1, Category::Backend, "Probot app"),
        Task::new("Performance", 5, 1, Category::DevOps, "Optimization"),
        Task::new("Test & Launch", 6, 1, Category::Testing, "QA & deploy"),
    ],
    milestones: vec![
        Milestone::new(2.5, "RPG Dialogue", "Core UI Done"),
        Milestone::new(4.5, "Bug Bot System", "Full Integr'n"),
        Milestone::new(6.5, "Test & Launch", "MVP Ready"),
    ],
});

/// The fixed plan rendered by the `ganttgen` binary.
pub fn mvp_six_week() -> &'static Plan {
    &MVP_PLAN
}
