//! Untrusted plan structure as returned by the model.
//!
//! Every field is optional. Values of the wrong type are treated as absent,
//! never as errors; defaults are applied later by the materializer.

use serde_json::{Map, Value};
use shared_types::{TaskPriority, TaskStatus};

/// Upper bound for any day count taken from the model (100 years).
/// Larger values are treated as absent so date arithmetic cannot overflow.
pub const MAX_DAY_COUNT: u32 = 36_500;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlan {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub total_duration_days: Option<u32>,
    pub tasks: Vec<RawTask>,
    pub milestones: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTask {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub start_day: Option<u32>,
    pub duration_days: Option<u32>,
    pub dependencies: Vec<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

impl RawPlan {
    pub fn from_json(map: &Map<String, Value>) -> Self {
        let tasks = match map.get("tasks") {
            Some(Value::Array(items)) => items.iter().map(RawTask::from_json).collect(),
            _ => Vec::new(),
        };

        let milestones = match map.get("milestones") {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };

        Self {
            project_name: map.get("project_name").and_then(as_text),
            description: map.get("description").and_then(as_text),
            total_duration_days: map.get("total_duration_days").and_then(as_positive_days),
            tasks,
            milestones,
        }
    }
}

impl RawTask {
    /// Non-object entries yield an all-default task
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let dependencies = match map.get("dependencies") {
            Some(Value::Array(items)) => items.iter().filter_map(as_text).collect(),
            _ => Vec::new(),
        };

        Self {
            id: map.get("id").and_then(as_text),
            name: map.get("name").and_then(as_text),
            description: map.get("description").and_then(as_text),
            assignee: map.get("assignee").and_then(as_text),
            start_day: map.get("start_day").and_then(as_day_count),
            duration_days: map.get("duration_days").and_then(as_positive_days),
            dependencies,
            priority: map
                .get("priority")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok()),
            status: map
                .get("status")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok()),
        }
    }
}

/// Strings as-is, numbers rendered; anything else is absent
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Whole, non-negative day count from an integer, an integral float or a
/// numeric string
fn as_day_count(value: &Value) -> Option<u32> {
    let days = match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => v,
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 || f < 0.0 || f > f64::from(MAX_DAY_COUNT) {
                    return None;
                }
                f as u64
            }
        },
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };

    u32::try_from(days).ok().filter(|d| *d <= MAX_DAY_COUNT)
}

fn as_positive_days(value: &Value) -> Option<u32> {
    as_day_count(value).filter(|d| *d > 0)
}
