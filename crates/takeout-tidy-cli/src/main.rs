mod commands;
mod logging;
mod progress;

use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{ApplyArgs, Cli, Commands, RunArgs};
use dotenv::dotenv;
use progress::CliReporter;
use takeout_tidy_core::{execute_ledger, AppConfig, PlanEngine, TaskLedger};
use tracing::{error, info, warn};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match takeout_tidy_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    let outcome = match args.command {
        Some(Commands::Run(run_args)) => run_plan(config, &run_args),
        Some(Commands::Apply(apply_args)) => run_apply(&apply_args),
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
            Ok(())
        }
        None => {
            let _ = Cli::command().print_long_help();
            Ok(())
        }
    };

    if let Err(err) = outcome {
        error!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run_plan(mut config: AppConfig, args: &RunArgs) -> Result<()> {
    if !args.folder.is_dir() {
        bail!("{} is not a folder", args.folder.display());
    }
    if args.keep_untitled_albums {
        config.keep_untitled_albums = true;
    }

    let reporter = CliReporter::new();
    let result = PlanEngine::new(config)
        .plan(&args.folder, &reporter)
        .with_context(|| format!("Planning failed for {}", args.folder.display()))?;

    let stats = &result.stats;
    info!(
        "Index: {}, Plan: {}",
        format!("{:.2}s", result.index_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.plan_duration.as_secs_f64()).green(),
    );
    info!(
        "{} duplicate names, {} clusters renamed, {} untitled albums removed",
        format!("{}", stats.duplicate_keys).red(),
        format!("{}", stats.renamed_clusters).red(),
        format!("{}", stats.pruned_albums.len()).red(),
    );
    info!(
        "{} album descriptors, {} albums moved, {} tasks planned",
        format!("{}", stats.descriptors_written).cyan(),
        format!("{}", stats.relocated_albums).cyan(),
        format!("{}", result.ledger.len()).cyan(),
    );
    for coverage in result.coverage.iter().filter(|c| !c.unique.is_empty()) {
        warn!(
            "Album {} holds the only copy of: {}",
            coverage.album.yellow(),
            coverage.unique.join(", ")
        );
    }

    if let Some(plan_path) = &args.save_plan {
        fs::write(plan_path, result.ledger.to_yaml()?)
            .with_context(|| format!("Could not write plan to {}", plan_path.display()))?;
        info!("Plan saved to {}", plan_path.display());
    }

    execute_ledger(&args.folder, &result.ledger, args.dry_run, &reporter)
        .context("Executing the plan failed, the takeout folder is partially updated")?;
    Ok(())
}

fn run_apply(args: &ApplyArgs) -> Result<()> {
    if !args.folder.is_dir() {
        bail!("{} is not a folder", args.folder.display());
    }

    let text = fs::read_to_string(&args.plan_file)
        .with_context(|| format!("Could not read plan {}", args.plan_file.display()))?;
    let ledger = TaskLedger::from_yaml(&text)
        .with_context(|| format!("Could not parse plan {}", args.plan_file.display()))?;
    info!(
        "Loaded {} tasks from {}",
        ledger.len(),
        args.plan_file.display()
    );

    let reporter = CliReporter::new();
    execute_ledger(&args.folder, &ledger, args.dry_run, &reporter)
        .context("Executing the plan failed, the takeout folder is partially updated")?;
    Ok(())
}
