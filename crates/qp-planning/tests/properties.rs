//! End-to-end behaviour of the capacity model and both engines

use std::collections::HashMap;

use chrono::NaiveDate;
use qp_core::config::CertaintyMultipliers;
use qp_core::types::{normalize_tag, EngineKind, Period};
use qp_models::{Certainty, Complexity, Holiday, ItemKind, ManualOverride, Priority, TeamMember, WorkItem};
use qp_planning::{
    capacities_for_members, presets, strict, working_days_between, AssignmentEngine, AssignmentInput,
    AssignmentMetrics, AssignmentOverview, CapacityRecord, EnhancedEngine, Proposal, ProposalItem,
    ProposalStatus, StrictEngine,
};

const TOLERANCE: f64 = 1e-6;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn period() -> Period {
    Period::new(date(2025, 1, 1), date(2025, 3, 31))
}

fn fixture() -> (Vec<WorkItem>, Vec<TeamMember>, Vec<Holiday>) {
    let table = CertaintyMultipliers::default();
    let items = vec![
        WorkItem::new("i1", "Ledger import", ItemKind::Feature, 20.0, Certainty::Low, &table)
            .with_application("FIS")
            .with_priority(Priority::High)
            .with_required_skills(["rust", "sql"]),
        WorkItem::new("i2", "Report export", ItemKind::Story, 8.0, Certainty::Mid, &table)
            .with_application("fis ")
            .with_deadline(date(2025, 2, 1)),
        WorkItem::new("i3", "Login page", ItemKind::Story, 12.0, Certainty::High, &table)
            .with_application("CRM")
            .with_complexity(Complexity::Simple),
        WorkItem::new("i4", "Unscoped", ItemKind::Story, 3.0, Certainty::High, &table),
        WorkItem::new("i5", "Big migration", ItemKind::Feature, 60.0, Certainty::Mid, &table)
            .with_application("FIS")
            .with_priority(Priority::Critical),
    ];
    let members = vec![
        TeamMember::new("m1", "Ada")
            .with_application("FIS")
            .with_allocation(50.0)
            .with_pto(3.0)
            .with_country("DE")
            .with_skills(["Rust"]),
        TeamMember::new("m2", "Bo")
            .with_application("fis")
            .with_allocation(30.0)
            .with_skills(["SQL", "rust"]),
        TeamMember::new("m3", "Cy").with_application("CRM").with_allocation(10.0),
        TeamMember::new("m4", "Di").with_application("FIS").with_allocation(0.0),
    ];
    let holidays = vec![
        Holiday::new(date(2025, 1, 1), "New Year"),
        Holiday::new(date(2025, 1, 6), "Epiphany").for_countries(["DE"]),
    ];
    (items, members, holidays)
}

fn check_conservation(results: &[ProposalItem]) {
    for r in results {
        let assigned: f64 = r.allocations.iter().map(|a| a.days_assigned).sum();
        assert!(
            (assigned + r.unassigned_days - r.adjusted_days).abs() < TOLERANCE,
            "{} does not add up",
            r.item_id
        );
        assert!(r.unassigned_days >= 0.0);
        assert!(r.allocations.iter().all(|a| a.days_assigned > 0.0));
    }
}

fn check_capacity(results: &[ProposalItem], capacities: &[CapacityRecord]) {
    let mut used: HashMap<&str, f64> = HashMap::new();
    for a in results.iter().flat_map(|r| &r.allocations) {
        *used.entry(a.member_id.as_str()).or_default() += a.days_assigned;
    }
    for c in capacities {
        let total = used.get(c.member_id.as_str()).copied().unwrap_or(0.0);
        assert!(total <= c.capacity_days + TOLERANCE, "{} over capacity", c.member_id);
    }
}

fn check_status(results: &[ProposalItem]) {
    for r in results {
        assert_eq!(r.unassigned_days == 0.0, r.status == ProposalStatus::FullyAssigned, "{}", r.item_id);
        if r.allocations.is_empty() && r.adjusted_days > 0.0 {
            assert_eq!(r.status, ProposalStatus::Unassigned, "{}", r.item_id);
        }
        if r.status == ProposalStatus::Unassigned {
            assert!(r.allocations.is_empty());
        }
    }
}

#[test]
fn working_day_count() {
    assert_eq!(working_days_between(date(2025, 1, 6), date(2025, 1, 10)), 5);
    assert_eq!(working_days_between(date(2025, 1, 4), date(2025, 1, 5)), 0);
}

#[test]
fn capacity_is_never_negative() {
    let (_, mut members, holidays) = fixture();
    members.push(TeamMember::new("m5", "Ed").with_allocation(5.0).with_pto(40.0));
    for record in capacities_for_members(&members, &holidays, Some(&period())) {
        assert!(record.capacity_days >= 0.0);
    }
}

#[test]
fn worked_example() {
    let table = CertaintyMultipliers::default();
    let items = vec![WorkItem::new("i1", "Import", ItemKind::Story, 10.0, Certainty::High, &table).with_application("FIS")];
    let members = vec![
        TeamMember::new("A", "A").with_application("FIS"),
        TeamMember::new("B", "B").with_application("FIS"),
    ];
    let capacities = vec![CapacityRecord::fixed("A", 6.0), CapacityRecord::fixed("B", 8.0)];

    let results = strict::assign(&items, &members, &capacities);
    assert_eq!(results[0].status, ProposalStatus::FullyAssigned);
    let pairs: Vec<(&str, f64)> = results[0]
        .allocations
        .iter()
        .map(|a| (a.member_id.as_str(), a.days_assigned))
        .collect();
    assert_eq!(pairs, vec![("B", 8.0), ("A", 2.0)]);
}

#[test]
fn strict_engine_properties() {
    let (items, members, holidays) = fixture();
    let capacities = capacities_for_members(&members, &holidays, Some(&period()));
    let results = strict::assign(&items, &members, &capacities);

    assert_eq!(results.len(), items.len());
    check_conservation(&results);
    check_capacity(&results, &capacities);
    check_status(&results);

    // application gate
    for r in &results {
        let item = items.iter().find(|i| i.id == r.item_id).unwrap();
        for a in &r.allocations {
            let member = members.iter().find(|m| m.id == a.member_id).unwrap();
            assert_eq!(
                member.application.as_deref().map(normalize_tag),
                item.application.as_deref().map(normalize_tag)
            );
        }
    }

    let unscoped = results.iter().find(|r| r.item_id == "i4").unwrap();
    assert_eq!(unscoped.status, ProposalStatus::Unassigned);
    assert_eq!(unscoped.assignment_reason.as_deref(), Some("Application required for assignment"));
}

#[test]
fn enhanced_engine_properties() {
    let (items, members, holidays) = fixture();
    let capacities = capacities_for_members(&members, &holidays, Some(&period()));
    let overrides = vec![
        ManualOverride::new("i2", "m2", 2.0),
        ManualOverride::new("i3", "m1", 1000.0),
    ];
    let as_of = date(2025, 1, 2);

    for strategy in presets::all() {
        let engine = EnhancedEngine::new(strategy);
        let input = AssignmentInput::new(&items, &members, &capacities, as_of).with_overrides(&overrides);
        let results = engine.assign(&input);

        assert_eq!(results.len(), items.len());
        check_conservation(&results);
        check_capacity(&results, &capacities);
        check_status(&results);
        assert_eq!(results[0].item_id, "i5", "critical item goes first");
    }
}

#[test]
fn engines_are_deterministic() {
    let (items, members, holidays) = fixture();
    let capacities = capacities_for_members(&members, &holidays, Some(&period()));
    let as_of = date(2025, 1, 2);
    let input = AssignmentInput::new(&items, &members, &capacities, as_of);

    let engines: Vec<Box<dyn AssignmentEngine>> =
        vec![Box::new(StrictEngine), Box::new(EnhancedEngine::new(presets::hybrid()))];
    for engine in engines {
        let first = serde_json::to_string(&engine.assign(&input)).unwrap();
        let second = serde_json::to_string(&engine.assign(&input)).unwrap();
        assert_eq!(first, second, "{}", engine.name());
    }
}

#[test]
fn no_period_assigns_nothing() {
    let (items, members, holidays) = fixture();
    let capacities = capacities_for_members(&members, &holidays, None);
    let results = strict::assign(&items, &members, &capacities);
    assert!(results.iter().all(|r| r.allocations.is_empty()));
}

#[test]
fn metrics_and_overview_agree() {
    let (items, members, holidays) = fixture();
    let capacities = capacities_for_members(&members, &holidays, Some(&period()));
    let input = AssignmentInput::new(&items, &members, &capacities, date(2025, 1, 2));
    let results = EnhancedEngine::new(presets::hybrid()).assign(&input);

    let metrics = AssignmentMetrics::compute(&members, &capacities, &results);
    assert_eq!(
        metrics.fully_assigned + metrics.partially_assigned + metrics.unassigned,
        items.len()
    );

    let proposal = Proposal::new(EngineKind::Enhanced, None, results);
    let overview = AssignmentOverview::build(&proposal, &capacities);
    let allocated: f64 = proposal.items.iter().map(|r| r.assigned_days()).sum();
    assert!((overview.totals.allocated_days - allocated).abs() < TOLERANCE);
    assert_eq!(overview.per_member.len(), members.len());
    assert!(overview.per_member.iter().all(|m| !m.is_over_allocated()));
}
