use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{debug, info, warn};
use plancut::config::NestingConfig;
use plancut::io::export::export_report;
use plancut::io::import::import_job;
use plancut::nesting::{NestingOutcome, nest_job};
use plancut::search::{ProgressCallback, SearchProgress};
use plancut_cli::io;
use plancut_cli::io::cli::Cli;
use plancut_cli::io::output::JobOutput;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            NestingConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed NestingConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_job = io::read_job(args.input_file.as_path())?;
    let job = import_job(&ext_job)?;

    let progress: &ProgressCallback<'_> = &|p: &SearchProgress| {
        debug!(
            "[MAIN] attempt {}: {} on {} sheet(s) {}",
            p.attempt,
            p.heuristic,
            p.n_sheets,
            if p.success { "succeeded" } else { "failed" }
        );
    };
    let outcomes = nest_job(&job, &config, Some(progress))?;

    for group in &outcomes {
        match &group.outcome {
            NestingOutcome::NoValidParts => {
                warn!("[MAIN] {} mm: no valid parts to nest", group.thickness)
            }
            NestingOutcome::Infeasible => warn!(
                "[MAIN] {} mm: {} parts do not fit on {} sheets",
                group.thickness,
                group.n_requested.separate_with_commas(),
                config.max_sheets
            ),
            NestingOutcome::Nested(result) => info!(
                "[MAIN] {} mm: {} parts on {} sheet(s), {:.2}% utilization, {:.1} kg of sheet",
                group.thickness,
                result.n_parts().separate_with_commas(),
                result.total_sheets,
                result.utilization,
                result.sheet_weight()
            ),
        }
    }

    let output = JobOutput {
        report: export_report(&job.name, &outcomes),
        job: ext_job,
        config,
    };
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
