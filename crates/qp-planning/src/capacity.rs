//! Capacity model
//!
//! `capacity_days = max(0, working_days x allocation_pct/100 - pto_days - holidays)`,
//! rounded to two decimals. The ledger built from these records is owned by
//! exactly one generation run and dropped with it.

use std::collections::BTreeMap;

use qp_core::types::{round2, Days, MemberId, Period};
use qp_models::{Holiday, TeamMember};
use serde::{Deserialize, Serialize};

use crate::calendar::{applicable_holidays, working_days};

/// Derived capacity of one member for one period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRecord {
    pub member_id: MemberId,
    pub member_name: String,
    pub working_days: u32,
    pub allocation_pct: f64,
    pub pto_days: f64,
    pub public_holiday_days: u32,
    pub capacity_days: Days,
}

impl CapacityRecord {
    /// A record with capacity set directly, for callers that already know it
    pub fn fixed(member_id: impl Into<MemberId>, capacity_days: Days) -> Self {
        let member_id = member_id.into();
        Self {
            member_name: member_id.clone(),
            member_id,
            working_days: 0,
            allocation_pct: 0.0,
            pto_days: 0.0,
            public_holiday_days: 0,
            capacity_days: round2(capacity_days.max(0.0)),
        }
    }
}

/// Capacity of one member. Without a period everything is zero.
pub fn capacity_for_member(member: &TeamMember, holidays: &[Holiday], period: Option<&Period>) -> CapacityRecord {
    let (working, holiday_count) = match period {
        Some(period) => (
            working_days(period),
            applicable_holidays(member, holidays, period).count() as u32,
        ),
        None => (0, 0),
    };

    let gross = working as f64 * (member.allocation_pct / 100.0);
    let capacity = (gross - member.pto_days - holiday_count as f64).max(0.0);

    CapacityRecord {
        member_id: member.id.clone(),
        member_name: member.name.clone(),
        working_days: working,
        allocation_pct: member.allocation_pct,
        pto_days: member.pto_days,
        public_holiday_days: holiday_count,
        capacity_days: round2(capacity),
    }
}

/// One record per member, in member order
pub fn capacities_for_members(
    members: &[TeamMember],
    holidays: &[Holiday],
    period: Option<&Period>,
) -> Vec<CapacityRecord> {
    members
        .iter()
        .map(|m| capacity_for_member(m, holidays, period))
        .collect()
}

/// Running member -> remaining-days ledger for a single generation
#[derive(Debug, Clone, Default)]
pub struct CapacityLedger {
    initial: BTreeMap<MemberId, Days>,
    remaining: BTreeMap<MemberId, Days>,
}

impl CapacityLedger {
    pub fn from_records(records: &[CapacityRecord]) -> Self {
        let initial: BTreeMap<MemberId, Days> = records
            .iter()
            .map(|r| (r.member_id.clone(), r.capacity_days.max(0.0)))
            .collect();
        Self {
            remaining: initial.clone(),
            initial,
        }
    }

    /// Capacity at the start of the run; 0 for unknown members
    pub fn initial(&self, member_id: &str) -> Days {
        self.initial.get(member_id).copied().unwrap_or(0.0)
    }

    /// Capacity still free; 0 for unknown members
    pub fn remaining(&self, member_id: &str) -> Days {
        self.remaining.get(member_id).copied().unwrap_or(0.0)
    }

    pub fn has_capacity(&self, member_id: &str) -> bool {
        self.remaining(member_id) > crate::DAYS_EPSILON
    }

    /// Take up to `days` from the member; returns what was actually taken
    pub fn consume(&mut self, member_id: &str, days: Days) -> Days {
        match self.remaining.get_mut(member_id) {
            Some(left) => {
                let taken = days.max(0.0).min(*left);
                *left -= taken;
                if *left < crate::DAYS_EPSILON {
                    *left = 0.0;
                }
                taken
            }
            None => 0.0,
        }
    }

    pub fn total_remaining(&self) -> Days {
        self.remaining.values().sum()
    }
}
