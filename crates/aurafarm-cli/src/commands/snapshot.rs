use aurafarm_core::{Config, ConnectionStatus};
use clap::Args;

use super::source::SourceArgs;

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut dashboard = args.source.dashboard(&config)?;
    let state = args.source.refresh(&mut dashboard)?;

    if let ConnectionStatus::Fallback { reason } = &state.status {
        eprintln!("warning: {reason}; showing simulated data");
    }
    println!("{}", serde_json::to_string_pretty(&state.snapshot)?);
    Ok(())
}
