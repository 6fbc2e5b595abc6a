//! # AURA Farm Core Library
//!
//! This library provides the decision logic behind the AURA Farm monitoring
//! dashboard. All operations are available through the `aurafarm-cli`
//! binary; any graphical front end is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Readings**: Typed weather, soil and plant-health sections, each
//!   optional until loaded
//! - **Rule Engine**: A pure function from a snapshot to a prioritized list
//!   of field tasks
//! - **Sources**: Simulated data and snapshot files behind one trait
//! - **Dashboard**: Refresh driver with fallback to simulated data
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`generate_tasks`] / [`RuleEngine`]: Task generation
//! - [`EnvironmentalSnapshot`]: Engine input
//! - [`Dashboard`]: Snapshot refresh and connectivity status
//! - [`Config`]: Application configuration management

pub mod dashboard;
pub mod error;
pub mod readings;
pub mod rules;
pub mod source;
pub mod storage;
pub mod task;

pub use dashboard::{ConnectionStatus, Dashboard, DashboardState};
pub use error::{ConfigError, CoreError, SourceError};
pub use readings::{
    EnvironmentalSnapshot, PlantReadings, Reading, Section, SoilReadings, WeatherReadings,
};
pub use rules::{generate_tasks, Rule, RuleDescription, RuleEngine, RuleThresholds};
pub use source::{FileSource, SimulatedSource, SnapshotSource};
pub use storage::Config;
pub use task::{Priority, Task, TaskAction};
