use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod job;
mod sheet;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => cli::commands::generate::run(args),
        Commands::Inspect(args) => cli::commands::inspect::run(args),
        Commands::Clear => cli::commands::clear::run(),
    }
}
