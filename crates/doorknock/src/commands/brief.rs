//! Brief command - write the task briefs for a campaign

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use doorknock_core::crew::{CampaignRequest, Crew};
use doorknock_core::output::RunDirectory;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct BriefSummary {
    client_name: String,
    product: String,
    run_dir: PathBuf,
    tasks: Vec<WrittenTask>,
}

#[derive(Serialize)]
struct WrittenTask {
    index: usize,
    kind: String,
    agent: String,
    path: PathBuf,
}

/// Assemble the crew and write `task_<n>.json` for each task
///
/// # Arguments
///
/// * `out` - Base directory; falls back to `[output] dir` from the config
/// * `json` - Print a JSON summary instead of progress lines
pub fn run(
    client_name: String,
    product: String,
    out: Option<PathBuf>,
    json: bool,
    ctx: &Context,
) -> Result<()> {
    let request = CampaignRequest::new(client_name, product)?;
    let run_dir = RunDirectory::for_client(ctx.output_base(out), request.client_name())?;

    if ctx.verbose && !json {
        println!(
            "{} Assembling crew for '{}' ({})",
            "→".cyan(),
            request.client_name(),
            request.product()
        );
    }

    let crew = Crew::door_knocking(&request)?;
    run_dir.create()?;

    let mut written = Vec::with_capacity(crew.tasks().len());
    for (i, task) in crew.tasks().iter().enumerate() {
        let index = i + 1;
        let path = run_dir.write_task(index, task)?;
        log::info!("wrote {} brief to {}", task.kind, path.display());

        if !json {
            println!(
                "{} Wrote {} brief for the {} agent to {}",
                "✓".green().bold(),
                task.kind,
                task.agent,
                path.display()
            );
        }
        written.push(WrittenTask {
            index,
            kind: task.kind.to_string(),
            agent: task.agent.to_string(),
            path,
        });
    }

    if json {
        return print_json(&BriefSummary {
            client_name: request.client_name().to_string(),
            product: request.product().to_string(),
            run_dir: run_dir.path().to_path_buf(),
            tasks: written,
        });
    }

    println!(
        "\n{} Wrote {} task brief(s) to {}",
        "✓".green().bold(),
        written.len(),
        run_dir.path().display()
    );
    Ok(())
}
