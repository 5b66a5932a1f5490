//! Team member model
//!
//! A person available for assignment within one period.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use qp_core::types::{normalize_tag, normalized_tag, MemberId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::priority::ItemKind;

/// Two-letter upper-case country code
pub static COUNTRY_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

/// Team member entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Application tag, compared case-insensitively
    pub application: Option<String>,

    /// Share of each working day available, 0-100. Missing means 0.
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub allocation_pct: f64,

    /// Days off within the period. Missing means 0.
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub pto_days: f64,

    /// Used to resolve country-specific holidays
    #[validate(regex = "COUNTRY_CODE")]
    pub country: Option<String>,

    #[serde(default)]
    pub skills: BTreeSet<String>,

    /// Skill -> proficiency (1-5)
    #[serde(default)]
    pub skill_levels: BTreeMap<String, u8>,

    pub preferences: Option<MemberPreferences>,

    pub availability: Option<AvailabilityWindow>,
}

/// Optional working preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberPreferences {
    pub max_concurrent_items: Option<u32>,
    #[serde(default)]
    pub preferred_kinds: Vec<ItemKind>,
    #[serde(default)]
    pub avoided_kinds: Vec<ItemKind>,
    pub max_daily_hours: Option<f64>,
}

/// Availability window, either side open
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct AvailabilityWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl AvailabilityWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| s <= date) && self.end.map_or(true, |e| date <= e)
    }
}

impl TeamMember {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            application: None,
            allocation_pct: 0.0,
            pto_days: 0.0,
            country: None,
            skills: BTreeSet::new(),
            skill_levels: BTreeMap::new(),
            preferences: None,
            availability: None,
        }
    }

    pub fn normalized_application(&self) -> Option<String> {
        normalized_tag(self.application.as_deref())
    }

    /// Lower-cased skill set for case-insensitive matching
    pub fn normalized_skills(&self) -> BTreeSet<String> {
        self.skills.iter().map(|s| normalize_tag(s)).collect()
    }

    pub fn prefers(&self, kind: ItemKind) -> bool {
        self.preferences
            .as_ref()
            .is_some_and(|p| p.preferred_kinds.contains(&kind))
    }

    pub fn avoids_kind(&self, kind: ItemKind) -> bool {
        self.preferences
            .as_ref()
            .is_some_and(|p| p.avoided_kinds.contains(&kind))
    }

    pub fn max_concurrent_items(&self) -> Option<u32> {
        self.preferences.as_ref().and_then(|p| p.max_concurrent_items)
    }

    /// Available on `date`; no window means always available
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.availability.map_or(true, |w| w.contains(date))
    }

    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    pub fn with_allocation(mut self, allocation_pct: f64) -> Self {
        self.allocation_pct = allocation_pct;
        self
    }

    pub fn with_pto(mut self, pto_days: f64) -> Self {
        self.pto_days = pto_days;
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preferences(mut self, preferences: MemberPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn with_availability(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.availability = Some(AvailabilityWindow { start, end });
        self
    }
}
