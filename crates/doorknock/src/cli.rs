//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doorknock")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./doorknock.toml when present)
    #[arg(long, global = true, env = "DOORKNOCK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the agents in a door-knocking crew
    Agents {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the task briefs for a campaign
    Brief {
        /// Client the campaign is for
        #[arg(long)]
        client_name: String,

        /// Product or service being sold
        #[arg(long)]
        product: String,

        /// Base directory for the run directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output a JSON summary
        #[arg(long)]
        json: bool,
    },

    /// Render the landing page from marketing copy
    Site {
        /// Client the page is for
        #[arg(long)]
        client_name: String,

        /// Marketing copy file (JSON, or TOML with a .toml extension)
        #[arg(long)]
        copy: PathBuf,

        /// Footer year (defaults to the current year)
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,

        /// Base directory for the run directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print the page instead of writing index.html
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },
}
