use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "aurafarm-cli", version, about = "AURA Farm CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommended field tasks for the current readings
    Tasks(commands::tasks::TasksArgs),
    /// Print the current environmental snapshot
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Show the decision logic behind task generation
    Rules(commands::rules::RulesArgs),
    /// Refresh readings periodically and print tasks each time
    Watch(commands::watch::WatchArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Tasks(args) => commands::tasks::run(args),
        Commands::Snapshot(args) => commands::snapshot::run(args),
        Commands::Rules(args) => commands::rules::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
