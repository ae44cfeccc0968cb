// Tests for the compiled-in six-week plan and its validation rules.
use ganttgen::model::{Category, Milestone, Plan, Task};
use ganttgen::plan;

fn two_task_plan() -> Plan {
    Plan {
        title: "Test Plan".to_string(),
        tasks: vec![
            Task::new("A", 1, 1, Category::Frontend, "first"),
            Task::new("B", 2, 2, Category::Backend, "second"),
        ],
        milestones: vec![Milestone::new(1.5, "A", "A done")],
    }
}

#[test]
fn test_mvp_plan_shape() {
    let plan = plan::mvp_six_week();
    assert_eq!(plan.title, "6-Week MVP Development Plan");
    assert_eq!(plan.tasks.len(), 6);
    assert_eq!(plan.milestones.len(), 3);

    // One task per week, in order, each one week long.
    for (i, task) in plan.tasks.iter().enumerate() {
        assert_eq!(task.start_week, i as u32 + 1);
        assert_eq!(task.duration, 1);
        assert!(!task.description.is_empty());
    }

    plan.validate().expect("the shipped plan must validate");
}

#[test]
fn test_mvp_milestones_resolve_to_rows() {
    let plan = plan::mvp_six_week();
    for milestone in &plan.milestones {
        assert!(
            plan.row_of(&milestone.task).is_some(),
            "milestone '{}' should resolve",
            milestone.label
        );
    }
    // Spot-check the row mapping used for marker placement.
    assert_eq!(plan.row_of("Village Render"), Some(0));
    assert_eq!(plan.row_of("Test & Launch"), Some(5));
    assert_eq!(plan.row_of("Nope"), None);
}

#[test]
fn test_categories_are_deduplicated() {
    let plan = plan::mvp_six_week();
    let categories = plan.categories();
    // Six tasks but only four legend entries.
    assert_eq!(
        categories,
        vec![
            Category::Frontend,
            Category::Backend,
            Category::DevOps,
            Category::Testing
        ]
    );

    // A plan with a single category gets a single legend entry.
    let mut narrow = two_task_plan();
    for task in &mut narrow.tasks {
        task.category = Category::DevOps;
    }
    assert_eq!(narrow.categories(), vec![Category::DevOps]);
}

#[test]
fn test_validate_rejects_empty_plan() {
    let mut plan = two_task_plan();
    plan.tasks.clear();
    plan.milestones.clear();
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("no tasks"));
}

#[test]
fn test_validate_rejects_zero_duration() {
    let mut plan = two_task_plan();
    plan.tasks[1].duration = 0;
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("zero duration"));
}

#[test]
fn test_validate_rejects_week_zero() {
    let mut plan = two_task_plan();
    plan.tasks[0].start_week = 0;
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("1-based"));
}

#[test]
fn test_validate_rejects_duplicate_names() {
    let mut plan = two_task_plan();
    plan.tasks[1].name = "A".to_string();
    plan.milestones.clear();
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("Duplicate task name"));
}

#[test]
fn test_validate_rejects_unknown_milestone_task() {
    let mut plan = two_task_plan();
    plan.milestones.push(Milestone::new(2.0, "Ghost", "nowhere"));
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("unknown task"));
}
