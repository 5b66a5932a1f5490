//! Generate Service for Proposals
//!
//! Pulls the active period, the planning collections and the settings from
//! their providers, then runs one generation off the async executor.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use qp_contracts::{Contract, SnapshotContract};
use qp_core::config::AssignmentConfig;
use qp_core::traits::{PeriodProvider, SettingsProvider};
use qp_core::types::{Algorithm, EngineKind};
use qp_models::{recalculate_all, PlanningDataProvider, PlanningSnapshot};
use qp_planning::{
    capacities_for_members, AssignmentEngine, AssignmentInput, AssignmentMetrics, AssignmentOverview,
    AssignmentStrategy, CapacityRecord, EnhancedEngine, Proposal, StrictEngine,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::base::Callable;
use crate::result::ServiceResult;

pub const NO_ACTIVE_PERIOD: &str = "No active period selected";

/// Parameters of one generation
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// Overrides the configured engine
    pub engine: Option<EngineKind>,
    /// Overrides the configured algorithm
    pub algorithm: Option<Algorithm>,
    /// Reference date for availability and deadlines
    pub as_of: NaiveDate,
    /// Run the snapshot contract before generating
    pub validate: bool,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl GenerateParams {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            engine: None,
            algorithm: None,
            as_of,
            validate: true,
        }
    }

    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn skip_validation(mut self) -> Self {
        self.validate = false;
        self
    }
}

/// Everything one generation produces
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProposal {
    pub proposal: Proposal,
    pub capacities: Vec<CapacityRecord>,
    pub metrics: AssignmentMetrics,
    pub overview: AssignmentOverview,
}

/// Service for generating proposals
///
/// # Example
/// ```ignore
/// let service = GenerateProposalService::new(&snapshot, &snapshot, &config);
/// let result = service.call(GenerateParams::new(as_of)).await;
/// ```
pub struct GenerateProposalService<'a> {
    periods: &'a dyn PeriodProvider,
    data: &'a dyn PlanningDataProvider,
    settings: &'a dyn SettingsProvider,
}

impl<'a> GenerateProposalService<'a> {
    pub fn new(
        periods: &'a dyn PeriodProvider,
        data: &'a dyn PlanningDataProvider,
        settings: &'a dyn SettingsProvider,
    ) -> Self {
        Self {
            periods,
            data,
            settings,
        }
    }

    fn strategy(&self, params: &GenerateParams) -> AssignmentStrategy {
        let assignment = self.settings.assignment();
        let config = match params.algorithm {
            Some(algorithm) => AssignmentConfig {
                algorithm,
                ..assignment
            },
            None => assignment,
        };
        let mut strategy = AssignmentStrategy::from_config(&config);
        strategy.settings.require_application_match = self.settings.strict_application_matching();
        strategy
    }

    #[instrument(skip_all, fields(as_of = %params.as_of))]
    async fn generate(&self, params: GenerateParams) -> ServiceResult<GeneratedProposal> {
        let Some(period) = self.periods.active_period() else {
            warn!("Cannot generate without an active period");
            return ServiceResult::failure_with_base_error(NO_ACTIVE_PERIOD);
        };
        if !period.is_valid() {
            return ServiceResult::failure_with_error("period", "must start on or before its end date");
        }

        let multipliers = self.settings.multipliers();
        let mut snapshot = PlanningSnapshot {
            period: Some(period),
            items: self.data.work_items(),
            members: self.data.team_members(),
            holidays: self.data.holidays(),
            overrides: self.data.manual_overrides(),
            history: self.data.history(),
        };
        recalculate_all(&mut snapshot.items, &multipliers);

        if params.validate {
            let contract = SnapshotContract::new(&multipliers);
            let checked: ServiceResult<()> = contract.validate(&snapshot).into();
            if checked.is_failure() {
                warn!(errors = ?checked.full_messages(), "Planning data failed validation");
                return ServiceResult::failure(checked.errors().clone());
            }

            let issues = contract.override_issues(&snapshot);
            if !issues.is_empty() {
                warn!(issues = ?issues.full_messages(), "Manual overrides will be skipped");
            }
        }

        let engine = params.engine.unwrap_or(self.settings.assignment().engine);
        let strategy = self.strategy(&params);
        let as_of = params.as_of;
        info!(
            engine = ?engine,
            algorithm = strategy.algorithm.as_str(),
            items = snapshot.items.len(),
            members = snapshot.members.len(),
            "Generating proposal"
        );

        let handle = tokio::task::spawn_blocking(move || run(snapshot, engine, strategy, as_of));
        match handle.await {
            Ok(generated) => {
                let summary = generated.proposal.summary();
                info!(
                    proposal_id = %generated.proposal.id,
                    fully_assigned = summary.fully_assigned,
                    partially_assigned = summary.partially_assigned,
                    unassigned = summary.unassigned,
                    "Proposal generated"
                );
                let message = format!(
                    "{} of {} items fully assigned",
                    summary.fully_assigned,
                    generated.proposal.items.len()
                );
                ServiceResult::success_with_message(generated, message)
            }
            Err(e) => ServiceResult::failure_with_base_error(format!("Generation did not complete: {}", e)),
        }
    }
}

#[async_trait]
impl<'a> Callable<GenerateParams, GeneratedProposal> for GenerateProposalService<'a> {
    async fn call(&self, params: GenerateParams) -> ServiceResult<GeneratedProposal> {
        self.generate(params).await
    }
}

fn run(snapshot: PlanningSnapshot, engine: EngineKind, strategy: AssignmentStrategy, as_of: NaiveDate) -> GeneratedProposal {
    let capacities = capacities_for_members(&snapshot.members, &snapshot.holidays, snapshot.period.as_ref());
    let input = AssignmentInput::new(&snapshot.items, &snapshot.members, &capacities, as_of)
        .with_overrides(&snapshot.overrides)
        .with_history(&snapshot.history);

    let (items, algorithm) = match engine {
        EngineKind::Strict => (StrictEngine.assign(&input), None),
        EngineKind::Enhanced => (EnhancedEngine::new(strategy).assign(&input), Some(strategy.algorithm)),
    };

    let metrics = AssignmentMetrics::compute(&snapshot.members, &capacities, &items);
    let proposal = Proposal::new(engine, algorithm, items);
    let overview = AssignmentOverview::build(&proposal, &capacities);

    GeneratedProposal {
        proposal,
        capacities,
        metrics,
        overview,
    }
}
