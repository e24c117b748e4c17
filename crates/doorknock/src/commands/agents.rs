//! Agents command - list the crew's agent profiles

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use doorknock_core::crew::{AgentProfile, AgentRole};

pub fn run(json: bool, ctx: &Context) -> Result<()> {
    let profiles: Vec<AgentProfile> = AgentRole::ALL
        .into_iter()
        .map(AgentProfile::for_role)
        .collect();

    if json {
        return print_json(&profiles);
    }

    println!("{} Agents in a door-knocking crew:", "→".cyan());
    for profile in &profiles {
        println!("\n  {} ({})", profile.title.bold(), profile.role);
        println!("    Goal: {}", profile.goal);
        if ctx.verbose {
            println!("    Backstory: {}", profile.backstory);
        }
        if !profile.tools.is_empty() {
            let tools: Vec<&str> = profile.tools.iter().map(|t| t.name()).collect();
            println!("    Tools: {}", tools.join(", "));
        }
    }
    println!("\n{} Total: {} agent(s)", "→".cyan(), profiles.len());

    Ok(())
}
