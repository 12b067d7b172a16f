//! Command-line interface definitions

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ponjob-cli",
    about = "Generate fiber-test job CSVs from PON TEST SHEET workbooks",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a test sheet and write the job CSV
    Generate(GenerateArgs),
    /// Show the detected header row, column map and record counts
    Inspect(InspectArgs),
    /// Forget remembered form defaults
    Clear,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the PON TEST SHEET workbook (.xlsx)
    pub sheet: PathBuf,

    /// CFAS number (prompted if omitted, prefilled from the sheet when present)
    #[arg(long)]
    pub cfas: Option<String>,

    /// Technician UID (the @att.com suffix is added automatically)
    #[arg(long)]
    pub tech: Option<String>,

    /// Wire Center CLLI
    #[arg(long)]
    pub clli: Option<String>,

    /// Central Office
    #[arg(long)]
    pub co: Option<String>,

    /// PFP
    #[arg(long)]
    pub pfp: Option<String>,

    /// iOLM configuration name
    #[arg(long)]
    pub iolm_config: Option<String>,

    /// OPM configuration name
    #[arg(long)]
    pub opm_config: Option<String>,

    /// Leave OPM test points out of the export
    #[arg(long)]
    pub no_opm: bool,

    /// Leave iOLM test points out of the export
    #[arg(long)]
    pub no_iolm: bool,

    /// Directory to write the job CSV into
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Fail on missing required values instead of prompting
    #[arg(long)]
    pub non_interactive: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Path to the PON TEST SHEET workbook (.xlsx)
    pub sheet: PathBuf,
}
