//! Recommended field tasks produced by the rule engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority. Variant order gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for ordering: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the field robot (or farmer) is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    Irrigate,
    Fertilize,
    PhAdjust,
    Monitor,
    Inspect,
    Spray,
}

impl TaskAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskAction::Irrigate => "irrigate",
            TaskAction::Fertilize => "fertilize",
            TaskAction::PhAdjust => "ph_adjust",
            TaskAction::Monitor => "monitor",
            TaskAction::Inspect => "inspect",
            TaskAction::Spray => "spray",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recommended action with its justification.
///
/// Built fresh on every engine run; two tasks with the same fields are
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub action: TaskAction,
    /// Free-text duration, not machine parsed
    pub estimated_time: String,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        action: TaskAction,
        estimated_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            action,
            estimated_time: estimated_time.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_matches_rank() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::High.rank(), 3);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::Low.rank(), 1);
    }

    #[test]
    fn task_serializes_with_dashboard_field_names() {
        let task = Task::new(
            "Adjust Soil pH",
            "Soil pH is outside optimal range. Apply pH correction.",
            Priority::Medium,
            TaskAction::PhAdjust,
            "1 hour",
        );
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["action"], "ph_adjust");
        assert_eq!(json["estimatedTime"], "1 hour");
    }

    #[test]
    fn action_display_matches_serde_name() {
        for action in [
            TaskAction::Irrigate,
            TaskAction::Fertilize,
            TaskAction::PhAdjust,
            TaskAction::Monitor,
            TaskAction::Inspect,
            TaskAction::Spray,
        ] {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, action.to_string());
        }
    }
}
