//! Dashboard state: the latest snapshot, its tasks and the link status.
//!
//! [`Dashboard::refresh`] never fails. When the source errors, the simulated
//! baseline is substituted and the status says so. [`Dashboard::try_refresh`]
//! reports the error instead and keeps the previous state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::readings::EnvironmentalSnapshot;
use crate::rules::RuleEngine;
use crate::source::{SimulatedSource, SnapshotSource};
use crate::storage::Config;
use crate::task::Task;

/// Default auto-refresh period in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 300;

/// Connectivity shown next to the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// No refresh has completed yet
    Connecting,
    /// Last refresh came from the configured source
    Connected,
    /// Last refresh failed; simulated data is displayed
    Fallback { reason: String },
}

impl ConnectionStatus {
    pub fn message(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Fallback { .. } => "Using Simulated Data",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

/// Everything a renderer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    pub snapshot: EnvironmentalSnapshot,
    pub tasks: Vec<Task>,
    pub status: ConnectionStatus,
    pub last_update: Option<DateTime<Utc>>,
}

/// Refresh driver over a snapshot source.
pub struct Dashboard<S> {
    source: S,
    engine: RuleEngine,
    state: DashboardState,
}

impl<S: SnapshotSource> Dashboard<S> {
    /// Start with the simulated baseline so there is something to show
    /// before the first refresh.
    pub fn new(source: S, engine: RuleEngine) -> Self {
        let snapshot = SimulatedSource::baseline();
        let tasks = engine.generate(Some(&snapshot));
        Self {
            source,
            engine,
            state: DashboardState {
                snapshot,
                tasks,
                status: ConnectionStatus::Connecting,
                last_update: Some(Utc::now()),
            },
        }
    }

    /// Dashboard using the thresholds from `config`.
    ///
    /// Fails when the configured thresholds are invalid.
    pub fn from_config(source: S, config: &Config) -> Result<Self> {
        config.thresholds.validate()?;
        Ok(Self::new(source, config.engine()))
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch a new snapshot and regenerate tasks.
    pub fn refresh(&mut self) -> &DashboardState {
        let (snapshot, status) = match self.source.fetch() {
            Ok(snapshot) => (snapshot, ConnectionStatus::Connected),
            Err(e) => {
                warn!(
                    source = self.source.name(),
                    error = %e,
                    "snapshot fetch failed, using simulated data"
                );
                (
                    SimulatedSource::baseline(),
                    ConnectionStatus::Fallback {
                        reason: e.to_string(),
                    },
                )
            }
        };
        self.apply(snapshot, status)
    }

    /// Like [`Dashboard::refresh`], but a failed fetch is returned as an
    /// error and the previous state is kept.
    pub fn try_refresh(&mut self) -> Result<&DashboardState> {
        let snapshot = self.source.fetch().inspect_err(|e| {
            warn!(source = self.source.name(), error = %e, "snapshot fetch failed");
        })?;
        Ok(self.apply(snapshot, ConnectionStatus::Connected))
    }

    fn apply(
        &mut self,
        snapshot: EnvironmentalSnapshot,
        status: ConnectionStatus,
    ) -> &DashboardState {
        let tasks = self.engine.generate(Some(&snapshot));
        info!(
            source = self.source.name(),
            status = status.message(),
            tasks = tasks.len(),
            "dashboard refreshed"
        );

        self.state = DashboardState {
            snapshot,
            tasks,
            status,
            last_update: Some(Utc::now()),
        };
        &self.state
    }
}
