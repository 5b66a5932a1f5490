//! Eligibility checks shared by the engines

use chrono::NaiveDate;
use qp_core::types::{tags_match, Days};
use qp_models::{TeamMember, WorkItem};

use crate::strategy::StrategySettings;

/// What a member has taken on so far in the current run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemberLoad {
    pub assigned_days: Days,
    pub item_count: u32,
}

impl MemberLoad {
    pub fn record(&mut self, days: Days) {
        self.assigned_days += days;
        self.item_count += 1;
    }
}

/// Why a member was left out of an item's candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligible {
    NoCapacity,
    ApplicationMismatch,
    Avoided,
    ConcurrencyLimit,
    Unavailable,
}

/// Concurrency cap for a member: the tighter of their own preference and the strategy default
pub fn concurrency_limit(member: &TeamMember, settings: &StrategySettings) -> u32 {
    match member.max_concurrent_items() {
        Some(own) => own.min(settings.max_concurrent_items),
        None => settings.max_concurrent_items,
    }
}

/// Check a member against an item. `as_of` stands in for "now".
pub fn check(
    member: &TeamMember,
    item: &WorkItem,
    remaining_capacity: Days,
    load: &MemberLoad,
    settings: &StrategySettings,
    as_of: NaiveDate,
) -> Result<(), Ineligible> {
    if remaining_capacity <= crate::DAYS_EPSILON {
        return Err(Ineligible::NoCapacity);
    }
    if settings.require_application_match
        && !tags_match(member.application.as_deref(), item.application.as_deref())
    {
        return Err(Ineligible::ApplicationMismatch);
    }
    if item.avoids(&member.id) {
        return Err(Ineligible::Avoided);
    }
    if load.item_count >= concurrency_limit(member, settings) {
        return Err(Ineligible::ConcurrencyLimit);
    }
    if settings.consider_availability && !member.is_available_on(as_of) {
        return Err(Ineligible::Unavailable);
    }
    Ok(())
}

pub fn is_eligible(
    member: &TeamMember,
    item: &WorkItem,
    remaining_capacity: Days,
    load: &MemberLoad,
    settings: &StrategySettings,
    as_of: NaiveDate,
) -> bool {
    check(member, item, remaining_capacity, load, settings, as_of).is_ok()
}
