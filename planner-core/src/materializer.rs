//! Converts a [`RawPlan`] into a dated [`ProjectPlan`].

use crate::raw::{RawPlan, RawTask};
use chrono::{Days, Local, NaiveDate};
use shared_types::{ProjectPlan, Task};
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub const DEFAULT_TOTAL_DURATION_DAYS: u32 = 30;
pub const DEFAULT_PROJECT_NAME: &str = "New Project";
pub const DEFAULT_TASK_NAME: &str = "Unnamed Task";
pub const DEFAULT_ASSIGNEE: &str = "Team Member";

const FALLBACK_MIN_TASKS: u32 = 3;
const FALLBACK_MAX_TASKS: u32 = 6;
const FALLBACK_DAYS_PER_TASK: u32 = 5;
const FALLBACK_ASSIGNEES: u32 = 3;

/// The instant a plan is materialized at: day 0 of the schedule and the
/// source of the project id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub date: NaiveDate,
    pub timestamp: i64,
}

impl Anchor {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.date_naive(),
            timestamp: now.timestamp(),
        }
    }

    fn day(&self, offset: u32) -> NaiveDate {
        self.date + Days::new(u64::from(offset))
    }
}

pub fn materialize(raw: &RawPlan, anchor: Anchor) -> ProjectPlan {
    let total_duration_days = raw
        .total_duration_days
        .unwrap_or(DEFAULT_TOTAL_DURATION_DAYS);

    let tasks = if raw.tasks.is_empty() {
        warn!(
            total_duration_days,
            "Model returned no tasks, synthesizing default schedule"
        );
        synthesize_tasks(total_duration_days, anchor)
    } else {
        raw.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| materialize_task(task, index, anchor))
            .collect()
    };

    let team_members: BTreeSet<String> = tasks.iter().map(|t| t.assignee.clone()).collect();

    debug!(
        tasks = tasks.len(),
        team_members = team_members.len(),
        "Materialized project plan"
    );

    ProjectPlan {
        project_id: format!("proj-{}", anchor.timestamp),
        project_name: raw
            .project_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        description: raw.description.clone().unwrap_or_default(),
        start_date: anchor.date,
        end_date: anchor.day(total_duration_days - 1),
        total_duration_days,
        tasks,
        team_members: team_members.into_iter().collect(),
        milestones: raw.milestones.clone(),
    }
}

fn materialize_task(raw: &RawTask, index: usize, anchor: Anchor) -> Task {
    let start_day = raw.start_day.unwrap_or(0);
    let duration_days = raw.duration_days.unwrap_or(1);
    let start_date = anchor.day(start_day);

    Task {
        id: raw
            .id
            .clone()
            .unwrap_or_else(|| format!("task-{}", index + 1)),
        name: raw
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_TASK_NAME.to_string()),
        description: raw.description.clone().unwrap_or_default(),
        assignee: raw
            .assignee
            .clone()
            .unwrap_or_else(|| DEFAULT_ASSIGNEE.to_string()),
        start_date,
        end_date: start_date + Days::new(u64::from(duration_days - 1)),
        duration_days,
        dependencies: raw.dependencies.clone(),
        progress: 0,
        priority: raw.priority.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
    }
}

/// Generic sequential schedule used when the model produced no tasks.
///
/// Integer division can leave the last task ending before the plan end;
/// that slack is left as is.
pub fn synthesize_tasks(total_duration_days: u32, anchor: Anchor) -> Vec<Task> {
    let num_tasks = (total_duration_days / FALLBACK_DAYS_PER_TASK)
        .clamp(FALLBACK_MIN_TASKS, FALLBACK_MAX_TASKS);
    let task_days = (total_duration_days / num_tasks).max(1);

    (0..num_tasks)
        .map(|i| {
            let start_date = anchor.day(i * task_days);
            Task {
                id: format!("task-{}", i + 1),
                name: format!("Task {}", i + 1),
                description: format!("Project task {}", i + 1),
                assignee: format!("Team Member {}", (i % FALLBACK_ASSIGNEES) + 1),
                start_date,
                end_date: start_date + Days::new(u64::from(task_days - 1)),
                duration_days: task_days,
                dependencies: Vec::new(),
                progress: 0,
                priority: Default::default(),
                status: Default::default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_types::{TaskPriority, TaskStatus};

    fn anchor() -> Anchor {
        Anchor {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            timestamp: 1_740_820_000,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw_task(id: &str, assignee: &str, start_day: u32, duration_days: u32) -> RawTask {
        RawTask {
            id: Some(id.to_string()),
            name: Some(format!("Work on {}", id)),
            assignee: Some(assignee.to_string()),
            start_day: Some(start_day),
            duration_days: Some(duration_days),
            ..Default::default()
        }
    }

    #[test]
    fn test_primary_path_dates() {
        let raw = RawPlan {
            project_name: Some("Website".to_string()),
            total_duration_days: Some(14),
            tasks: vec![
                raw_task("task-1", "Alice", 0, 3),
                raw_task("task-2", "Bob", 3, 4),
                raw_task("task-3", "Alice", 7, 7),
            ],
            ..Default::default()
        };

        let plan = materialize(&raw, anchor());

        assert_eq!(plan.tasks.len(), 3);
        for (task, raw_task) in plan.tasks.iter().zip(&raw.tasks) {
            let span = (task.end_date - task.start_date).num_days();
            assert_eq!(span, i64::from(raw_task.duration_days.unwrap()) - 1);
        }
        assert_eq!(plan.tasks[1].start_date, date(2025, 3, 4));
        assert_eq!(plan.tasks[1].end_date, date(2025, 3, 7));
        assert_eq!(plan.start_date, date(2025, 3, 1));
        assert_eq!(plan.end_date, date(2025, 3, 14));
        assert_eq!(plan.team_members, vec!["Alice", "Bob"]);
        assert_eq!(plan.project_id, "proj-1740820000");
    }

    #[test]
    fn test_primary_path_defaults() {
        let raw = RawPlan {
            tasks: vec![RawTask::default(), RawTask::default()],
            ..Default::default()
        };

        let plan = materialize(&raw, anchor());

        assert_eq!(plan.project_name, "New Project");
        assert_eq!(plan.description, "");
        assert_eq!(plan.total_duration_days, 30);
        assert_eq!(plan.end_date, date(2025, 3, 30));

        let task = &plan.tasks[1];
        assert_eq!(task.id, "task-2");
        assert_eq!(task.name, "Unnamed Task");
        assert_eq!(task.assignee, "Team Member");
        assert_eq!(task.start_date, task.end_date);
        assert_eq!(task.duration_days, 1);
        assert_eq!(task.progress, 0);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(plan.team_members, vec!["Team Member"]);
    }

    #[test]
    fn test_dangling_dependencies_are_kept() {
        let mut task = raw_task("task-1", "Alice", 0, 2);
        task.dependencies = vec!["task-99".to_string()];
        let raw = RawPlan {
            tasks: vec![task],
            ..Default::default()
        };

        let plan = materialize(&raw, anchor());
        assert_eq!(plan.tasks[0].dependencies, vec!["task-99"]);
    }

    #[test]
    fn test_fallback_thirty_days() {
        let raw = RawPlan {
            total_duration_days: Some(30),
            ..Default::default()
        };

        let plan = materialize(&raw, anchor());

        assert_eq!(plan.tasks.len(), 6);
        for (i, task) in plan.tasks.iter().enumerate() {
            assert_eq!(task.duration_days, 5);
            assert_eq!(task.start_date, anchor().day(i as u32 * 5));
            assert!(task.dependencies.is_empty());
            assert_eq!(task.priority, TaskPriority::Medium);
        }
        for pair in plan.tasks.windows(2) {
            assert_eq!(pair[1].start_date, pair[0].end_date + Days::new(1));
        }
        assert_eq!(
            plan.team_members,
            vec!["Team Member 1", "Team Member 2", "Team Member 3"]
        );
        assert_eq!(plan.tasks[3].assignee, "Team Member 1");
    }

    #[test]
    fn test_fallback_keeps_remainder_slack() {
        let tasks = synthesize_tasks(10, anchor());
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.duration_days == 3));
        // 3 x 3 days ends on day 8, one day before the plan end
        assert_eq!(tasks[2].end_date, anchor().day(8));
    }

    #[test]
    fn test_fallback_long_project_caps_task_count() {
        let tasks = synthesize_tasks(90, anchor());
        assert_eq!(tasks.len(), 6);
        assert!(tasks.iter().all(|t| t.duration_days == 15));
    }

    #[test]
    fn test_fallback_tiny_project_keeps_positive_durations() {
        let tasks = synthesize_tasks(2, anchor());
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.duration_days == 1 && t.start_date == t.end_date));
    }

    #[test]
    fn test_milestones_copied_verbatim() {
        let milestone = json!({"name": "Launch", "day": 400, "extra": [1, 2]});
        let raw = RawPlan {
            total_duration_days: Some(10),
            milestones: vec![milestone.clone()],
            ..Default::default()
        };

        let plan = materialize(&raw, anchor());
        assert_eq!(plan.milestones, vec![milestone]);
    }
}
