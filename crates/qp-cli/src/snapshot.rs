//! Snapshot file loading

use std::path::Path;

use anyhow::Context;
use qp_models::PlanningSnapshot;

pub fn load(path: &Path) -> anyhow::Result<PlanningSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    parse(&raw).with_context(|| format!("parsing snapshot {}", path.display()))
}

pub fn parse(raw: &str) -> anyhow::Result<PlanningSnapshot> {
    let snapshot: PlanningSnapshot = serde_json::from_str(raw)?;
    tracing::debug!(
        items = snapshot.items.len(),
        members = snapshot.members.len(),
        holidays = snapshot.holidays.len(),
        overrides = snapshot.overrides.len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}
