//! Decision logic listing.

use aurafarm_core::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Print the rule table as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RulesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let rules = config.engine().describe();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("Decision logic ({} rules):", rules.len());
    println!();
    for rule in rules {
        println!("  IF {}: {}", rule.section, rule.condition);
        println!("  THEN: {} [{}, {}]", rule.title, rule.priority, rule.action);
        println!("  Reason: {}", rule.reasoning);
        println!();
    }
    Ok(())
}
