use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "takeout-tidy")]
#[command(about = "Turn a photo takeout into source folders plus album descriptors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan and apply the reorganisation of a takeout folder
    Run(RunArgs),
    /// Apply a plan saved earlier with `run --save-plan`
    Apply(ApplyArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Takeout root folder
    pub folder: PathBuf,
    /// Keep albums without a title
    #[arg(long)]
    pub keep_untitled_albums: bool,
    /// Print actions without executing them
    #[arg(long)]
    pub dry_run: bool,
    /// Write the planned actions to this YAML file
    #[arg(long, value_name = "FILE")]
    pub save_plan: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Takeout root folder the plan was made for
    pub folder: PathBuf,
    /// Plan file written by `run --save-plan`
    pub plan_file: PathBuf,
    /// Print actions without executing them
    #[arg(long)]
    pub dry_run: bool,
}
