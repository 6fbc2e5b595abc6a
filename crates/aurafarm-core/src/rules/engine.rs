//! Rule evaluation engine.
//!
//! Maps a snapshot to recommended tasks. Evaluation is pure: the snapshot is
//! only borrowed and every call builds a fresh task list.

use tracing::debug;

use super::{Rule, RuleDescription, RuleThresholds};
use crate::readings::EnvironmentalSnapshot;
use crate::task::Task;

/// Rule engine holding the threshold policy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleEngine {
    thresholds: RuleThresholds,
}

impl RuleEngine {
    /// Create an engine with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom thresholds
    pub fn with_thresholds(thresholds: RuleThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }

    /// Evaluate every rule against the snapshot.
    ///
    /// Returns tasks ordered by descending priority; tasks of equal priority
    /// keep rule-evaluation order. `None` yields an empty list.
    pub fn generate(&self, snapshot: Option<&EnvironmentalSnapshot>) -> Vec<Task> {
        let Some(snapshot) = snapshot else {
            return Vec::new();
        };

        let mut tasks: Vec<Task> = Rule::ALL
            .iter()
            .filter(|rule| rule.fires(snapshot, &self.thresholds))
            .map(|rule| {
                debug!(rule = ?rule, section = %rule.section(), "rule fired");
                rule.task()
            })
            .collect();

        // sort_by is stable
        tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
        tasks
    }

    /// The decision-logic listing for this engine's thresholds.
    pub fn describe(&self) -> Vec<RuleDescription> {
        Rule::ALL
            .iter()
            .map(|rule| RuleDescription::new(*rule, &self.thresholds))
            .collect()
    }
}

/// Generate tasks with the default thresholds.
pub fn generate_tasks(snapshot: Option<&EnvironmentalSnapshot>) -> Vec<Task> {
    RuleEngine::new().generate(snapshot)
}
