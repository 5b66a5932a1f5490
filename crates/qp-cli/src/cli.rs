//! Command line definition

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use qp_core::types::{Algorithm, EngineKind};

#[derive(Debug, Parser)]
#[command(name = "quarter-planner")]
#[command(about = "Capacity and assignment proposals for a planning quarter")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML or JSON); QP__* variables apply on top.
    /// Without it settings come from QP_* variables.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an assignment proposal
    Generate {
        /// Planning snapshot (JSON)
        #[arg(long)]
        snapshot: PathBuf,
        /// Engine and scoring preset; defaults to the configured one
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmArg>,
        /// Reference date for availability and deadlines (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Skip input validation
        #[arg(long, default_value_t = false)]
        no_validate: bool,
    },
    /// Show per-member capacity for the snapshot's period
    Capacity {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List the built-in scoring presets
    Presets {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Strict,
    SkillBased,
    WorkloadBalanced,
    PriorityBased,
    Hybrid,
}

impl AlgorithmArg {
    /// Engine plus preset; the strict engine has no preset
    pub fn selection(self) -> (EngineKind, Option<Algorithm>) {
        match self {
            Self::Strict => (EngineKind::Strict, None),
            Self::SkillBased => (EngineKind::Enhanced, Some(Algorithm::SkillBased)),
            Self::WorkloadBalanced => (EngineKind::Enhanced, Some(Algorithm::WorkloadBalanced)),
            Self::PriorityBased => (EngineKind::Enhanced, Some(Algorithm::PriorityBased)),
            Self::Hybrid => (EngineKind::Enhanced, Some(Algorithm::Hybrid)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}
