//! Task-generation rule engine.
//!
//! Turns an environmental snapshot into a prioritized list of field tasks
//! using fixed threshold rules.

pub mod engine;
pub mod rule;
pub mod thresholds;

pub use engine::{generate_tasks, RuleEngine};
pub use rule::{Rule, RuleDescription};
pub use thresholds::RuleThresholds;
