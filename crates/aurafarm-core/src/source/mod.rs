//! Snapshot acquisition.
//!
//! A [`SnapshotSource`] produces the readings the dashboard feeds to the
//! rule engine. Sources may fail; the dashboard decides what to do then.

mod file;
mod simulated;

pub use file::FileSource;
pub use simulated::SimulatedSource;

use crate::error::SourceError;
use crate::readings::EnvironmentalSnapshot;

/// Something that can hand out environmental snapshots.
pub trait SnapshotSource {
    /// Short name used in logs and status messages.
    fn name(&self) -> &str;

    /// Acquire a fresh snapshot.
    fn fetch(&mut self) -> Result<EnvironmentalSnapshot, SourceError>;
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&mut self) -> Result<EnvironmentalSnapshot, SourceError> {
        (**self).fetch()
    }
}
