//! Site command - render the landing page from marketing copy

use crate::context::Context;
use crate::output::print_raw;
use anyhow::Result;
use colored::Colorize;
use doorknock_core::output::RunDirectory;
use doorknock_core::{DoorknockError, Fields, SiteRenderer};
use std::path::PathBuf;

/// Render `index.html` for a client
///
/// The footer year comes from `--year`, then `[site] year`, then the
/// current year. Escaping follows `[site] escape`.
pub fn run(
    client_name: String,
    copy: PathBuf,
    year: Option<i32>,
    out: Option<PathBuf>,
    stdout: bool,
    ctx: &Context,
) -> Result<()> {
    let client_name = client_name.trim();
    let fields = Fields::from_file(&copy)?;
    let year = year.or(ctx.config.site.year);
    let renderer = SiteRenderer::new(ctx.config.site.escape);

    if ctx.verbose && !stdout {
        println!(
            "{} Rendering landing page for '{}' from {}",
            "→".cyan(),
            client_name,
            copy.display()
        );
    }

    let html = renderer
        .render(client_name, &fields, year)
        .map_err(DoorknockError::from)?;

    if stdout {
        print_raw(&html)?;
        return Ok(());
    }

    let run_dir = RunDirectory::for_client(ctx.output_base(out), client_name)?;
    let path = run_dir.write_site(&html)?;
    log::info!("wrote landing page to {}", path.display());

    println!("{} Wrote landing page to {}", "✓".green().bold(), path.display());
    Ok(())
}
