use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ega::config::EGAConfig;
use ega::io::cli::Cli;
use ega::io::output::{EGAOutput, ExtSolution};
use ega::opt::retry::run_optimization;
use ega::{EGAError, io};
use log::{error, info, warn};
use parterre::geometry::geo_traits::Region;
use parterre::io::import::import_instance;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            EGAConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    config.validate()?;

    info!("[MAIN] Successfully parsed EGAConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {:?}", args.input_file))?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import_instance(&ext_instance)?;
    info!(
        "[MAIN] instance `{}`: {} items of {} kinds in {} (clearance density {:.1}%)",
        ext_instance.name,
        instance.total_item_count(),
        instance.manifest.kinds().len(),
        instance.shape,
        instance.manifest.total_clearance_area() / instance.shape.area() * 100.0
    );

    let result = run_optimization(&instance, &config);

    let solution = match &result {
        Ok(sol) => Some(ExtSolution::from_solution(&instance, sol)),
        Err(
            EGAError::ConvergenceFailure {
                elapsed,
                attempts,
                best,
                ..
            }
            | EGAError::TimeBudgetExceeded {
                elapsed,
                attempts,
                best,
                ..
            },
        ) => {
            error!("[MAIN] no feasible placement found, exporting the best infeasible one");
            Some(ExtSolution::new(&instance, best, false, *attempts, *elapsed))
        }
        Err(_) => None,
    };

    if let Some(solution) = solution {
        let output = EGAOutput {
            instance: ext_instance,
            solution,
            config,
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    result?;
    Ok(())
}
