//! Snapshot source selection shared by the data commands.

use std::path::PathBuf;

use aurafarm_core::error::Result;
use aurafarm_core::{Config, Dashboard, DashboardState, FileSource, SimulatedSource, SnapshotSource};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Read readings from a JSON or TOML snapshot file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Perturb simulated readings on each refresh
    #[arg(long, conflicts_with = "file")]
    pub jitter: bool,
    /// Seed for simulated jitter (implies --jitter)
    #[arg(long, conflicts_with = "file")]
    pub seed: Option<u64>,
    /// Fail instead of falling back to simulated data when the source errors
    #[arg(long)]
    pub strict: bool,
}

impl SourceArgs {
    /// Pick a source: command-line flags first, then config.
    pub fn source(&self, config: &Config) -> Box<dyn SnapshotSource> {
        if let Some(path) = self.file.as_ref().or(config.snapshot_path.as_ref()) {
            return Box::new(FileSource::new(path));
        }

        let seed = self.seed.or(config.simulation.seed);
        if self.jitter || self.seed.is_some() || config.simulation.jitter {
            Box::new(SimulatedSource::with_jitter(seed))
        } else {
            Box::new(SimulatedSource::new())
        }
    }

    /// Dashboard over the selected source using configured thresholds.
    pub fn dashboard(&self, config: &Config) -> Result<Dashboard<Box<dyn SnapshotSource>>> {
        Dashboard::from_config(self.source(config), config)
    }

    /// Refresh, honouring `--strict`.
    pub fn refresh<'a>(
        &self,
        dashboard: &'a mut Dashboard<Box<dyn SnapshotSource>>,
    ) -> Result<&'a DashboardState> {
        if self.strict {
            dashboard.try_refresh()
        } else {
            Ok(dashboard.refresh())
        }
    }
}
