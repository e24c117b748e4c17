mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = Context::new(cli.config.as_deref(), cli.verbose).and_then(|ctx| {
        match cli.command {
            Commands::Agents { json } => commands::agents::run(json, &ctx),
            Commands::Brief {
                client_name,
                product,
                out,
                json,
            } => commands::brief::run(client_name, product, out, json, &ctx),
            Commands::Site {
                client_name,
                copy,
                year,
                out,
                stdout,
            } => commands::site::run(client_name, copy, year, out, stdout, &ctx),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
