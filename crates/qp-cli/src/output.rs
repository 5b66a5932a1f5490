//! Plain-text tables for terminal output

use std::fmt::Write;

use qp_planning::{AssignmentStrategy, CapacityRecord};
use qp_services::GeneratedProposal;

fn fmt_days(days: f64) -> String {
    format!("{:.2}", days)
}

pub fn capacity_table(records: &[CapacityRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<20} {:>8} {:>7} {:>6} {:>9} {:>9}",
        "MEMBER", "NAME", "WORKING", "ALLOC%", "PTO", "HOLIDAYS", "CAPACITY"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<12} {:<20} {:>8} {:>7.1} {:>6} {:>9} {:>9}",
            r.member_id,
            r.member_name,
            r.working_days,
            r.allocation_pct,
            fmt_days(r.pto_days),
            r.public_holiday_days,
            fmt_days(r.capacity_days)
        );
    }
    let total: f64 = records.iter().map(|r| r.capacity_days).sum();
    let _ = writeln!(out, "{:>76}", format!("total {}", fmt_days(total)));
    out
}

pub fn presets_table(presets: &[AssignmentStrategy]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:<18} {:>6} {:>9} {:>9} {:>9}",
        "PRESET", "NAME", "SKILL", "WORKLOAD", "PRIORITY", "DEADLINE"
    );
    for p in presets {
        let w = &p.weights;
        let _ = writeln!(
            out,
            "{:<20} {:<18} {:>6.2} {:>9.2} {:>9.2} {:>9.2}",
            p.algorithm.as_str(),
            p.name(),
            w.skill_match,
            w.workload_balance,
            w.priority,
            w.deadline
        );
    }
    out
}

pub fn proposal_table(generated: &GeneratedProposal) -> String {
    let proposal = &generated.proposal;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Proposal {} generated {} ({})",
        proposal.id,
        proposal.generated_at.to_rfc3339(),
        proposal.algorithm.map_or("strict", |a| a.as_str())
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<12} {:<28} {:>8} {:>10} {:<19} ASSIGNEES",
        "ITEM", "TITLE", "DAYS", "OPEN", "STATUS"
    );
    for item in &proposal.items {
        let assignees = if item.allocations.is_empty() {
            item.assignment_reason.clone().unwrap_or_default()
        } else {
            item.allocations
                .iter()
                .map(|a| format!("{} {}", a.member_name, fmt_days(a.days_assigned)))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(
            out,
            "{:<12} {:<28} {:>8} {:>10} {:<19} {}",
            item.key.as_deref().unwrap_or(&item.item_id),
            truncate(&item.title, 28),
            fmt_days(item.adjusted_days),
            fmt_days(item.unassigned_days),
            item.status.as_str(),
            assignees
        );
    }

    let m = &generated.metrics;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "fully {} / partially {} / unassigned {}   efficiency {:.1}%   avg skill match {:.1}   workload variance {:.3}",
        m.fully_assigned, m.partially_assigned, m.unassigned, m.efficiency, m.average_skill_match, m.workload_variance
    );
    if m.deadline_at_risk > 0 || m.dependency_blocked > 0 {
        let _ = writeln!(
            out,
            "at risk {}   blocked {}",
            m.deadline_at_risk, m.dependency_blocked
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<12} {:<20} {:>9} {:>10} {:>10}",
        "MEMBER", "NAME", "CAPACITY", "ALLOCATED", "REMAINING"
    );
    for row in &generated.overview.per_member {
        let _ = writeln!(
            out,
            "{:<12} {:<20} {:>9} {:>10} {:>10}{}",
            row.member_id,
            row.member_name,
            fmt_days(row.capacity_days),
            fmt_days(row.allocated_days),
            fmt_days(row.remaining_days),
            if row.is_over_allocated() { "  over" } else { "" }
        );
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}~", cut)
    }
}
