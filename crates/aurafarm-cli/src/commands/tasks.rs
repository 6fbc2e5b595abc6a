//! Task list command.

use aurafarm_core::{Config, ConnectionStatus, DashboardState};
use clap::Args;

use super::source::SourceArgs;

#[derive(Args, Debug)]
pub struct TasksArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Print the task list as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TasksArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut dashboard = args.source.dashboard(&config)?;
    let source_name = dashboard.source_name().to_string();
    let state = args.source.refresh(&mut dashboard)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.tasks)?);
    } else {
        print_state(&source_name, state);
    }
    Ok(())
}

/// Human-readable rendering of a refreshed dashboard.
pub fn print_state(source_name: &str, state: &DashboardState) {
    match &state.status {
        ConnectionStatus::Fallback { reason } => {
            println!("Status: {} ({reason})", state.status.message())
        }
        status => println!("Status: {} [{source_name}]", status.message()),
    }
    if let Some(at) = state.last_update {
        println!("Last updated: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!();

    if state.tasks.is_empty() {
        println!("No tasks required. All systems optimal.");
        return;
    }

    println!("Recommended tasks ({}):", state.tasks.len());
    for (i, task) in state.tasks.iter().enumerate() {
        println!(
            "  {}. [{}] {} ({})",
            i + 1,
            task.priority.as_str().to_uppercase(),
            task.title,
            task.estimated_time
        );
        println!("     {}", task.description);
    }
}
