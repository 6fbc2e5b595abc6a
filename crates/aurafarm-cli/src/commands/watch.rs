//! Periodic refresh loop.

use std::time::Duration;

use aurafarm_core::{Config, DashboardState};
use clap::Args;
use serde::Serialize;
use tracing::info;

use super::source::SourceArgs;
use super::tasks::print_state;

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Seconds between refreshes (default: refresh.interval_secs from config)
    #[arg(long)]
    pub interval: Option<u64>,
    /// Stop after this many refreshes
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,
    /// Print one JSON object per refresh
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RefreshReport<'a> {
    refresh: u64,
    source: &'a str,
    #[serde(flatten)]
    state: &'a DashboardState,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let interval_secs = args.interval.unwrap_or(config.refresh.interval_secs);
    if interval_secs == 0 {
        return Err("interval must be at least 1 second".into());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch(args, config, Duration::from_secs(interval_secs)))
}

async fn watch(
    args: WatchArgs,
    config: Config,
    period: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = args.source.dashboard(&config)?;
    let source_name = dashboard.source_name().to_string();
    let mut ticker = tokio::time::interval(period);
    let mut refreshes = 0u64;

    info!(source = %source_name, period_secs = period.as_secs(), "watching");

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                return Ok(());
            }
        }

        refreshes += 1;
        let state = args.source.refresh(&mut dashboard)?;
        if args.json {
            let report = RefreshReport {
                refresh: refreshes,
                source: &source_name,
                state,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("=== Refresh #{refreshes} ===");
            print_state(&source_name, state);
            println!();
        }

        if args.count.is_some_and(|count| refreshes >= count) {
            return Ok(());
        }
    }
}
