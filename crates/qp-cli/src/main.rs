//! Quarter Planner CLI
//!
//! Reads a planning snapshot from disk and prints capacities or a generated
//! proposal. Logs go to stderr so stdout stays machine-readable.

use anyhow::bail;
use chrono::Utc;
use clap::Parser;
use qp_core::config::PlannerConfig;
use qp_planning::{capacities_for_members, presets};
use qp_services::{Callable, GenerateParams, GenerateProposalService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod output;
mod snapshot;

use cli::{Cli, Commands, OutputFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PlannerConfig::load(Some(&path.to_string_lossy())).map_err(|err| {
            tracing::error!(code = err.error_code(), path = %path.display(), "Rejected settings file");
            err
        })?,
        None => PlannerConfig::from_env(),
    };

    match cli.command {
        Commands::Generate {
            snapshot,
            algorithm,
            as_of,
            format,
            no_validate,
        } => {
            let snapshot = snapshot::load(&snapshot)?;
            let mut params = GenerateParams::new(as_of.unwrap_or_else(|| Utc::now().date_naive()));
            if let Some(algorithm) = algorithm {
                let (engine, preset) = algorithm.selection();
                params = params.with_engine(engine);
                if let Some(preset) = preset {
                    params = params.with_algorithm(preset);
                }
            }
            if no_validate {
                params = params.skip_validation();
            }

            let service = GenerateProposalService::new(&snapshot, &snapshot, &config);
            let mut result = service.call(params).await;
            let Some(generated) = result.take_result().filter(|_| result.is_success()) else {
                for message in result.full_messages() {
                    eprintln!("error: {}", message);
                }
                bail!("proposal generation failed");
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&generated)?),
                OutputFormat::Table => print!("{}", output::proposal_table(&generated)),
            }
        }
        Commands::Capacity { snapshot, format } => {
            let snapshot = snapshot::load(&snapshot)?;
            if snapshot.period.is_none() {
                tracing::warn!("Snapshot has no period, every capacity is 0");
            }
            let records = capacities_for_members(&snapshot.members, &snapshot.holidays, snapshot.period.as_ref());
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
                OutputFormat::Table => print!("{}", output::capacity_table(&records)),
            }
        }
        Commands::Presets { format } => {
            let all = presets::all();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&all)?),
                OutputFormat::Table => print!("{}", output::presets_table(&all)),
            }
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,qp_planning=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
