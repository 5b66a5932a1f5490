//! Common types used throughout Quarter Planner

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Work item identifier (local id or imported tracker id)
pub type ItemId = String;

/// Team member identifier
pub type MemberId = String;

/// Effort or capacity expressed in person-days
pub type Days = f64;

/// Planning period (start to end, both inclusive)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A period is usable only when it is non-empty
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Calendar days in the period, 0 for an inverted range
    pub fn calendar_days(&self) -> i64 {
        if self.is_valid() {
            (self.end - self.start).num_days() + 1
        } else {
            0
        }
    }

    /// Quarter `q` (1-4) of `year`
    pub fn quarter(year: i32, q: u32) -> Option<Self> {
        if !(1..=4).contains(&q) {
            return None;
        }
        let first_month = (q - 1) * 3 + 1;
        let start = NaiveDate::from_ymd_opt(year, first_month, 1)?;
        let next = if q == 4 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, first_month + 3, 1)?
        };
        Some(Self::new(start, next.pred_opt()?))
    }
}

/// Whether a date falls on Monday through Friday
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Normalize a free-text tag for comparison (trim + lowercase)
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalized tag, or None when absent or blank
pub fn normalized_tag(tag: Option<&str>) -> Option<String> {
    tag.map(normalize_tag).filter(|t| !t.is_empty())
}

/// Case/whitespace-insensitive equality of two tags. Blank never matches.
pub fn tags_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (normalized_tag(a), normalized_tag(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Which assignment engine a generation runs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    /// Application matching only, largest remaining capacity first
    Strict,
    /// Multi-factor weighted scoring
    #[default]
    Enhanced,
}

/// Named scoring presets for the enhanced engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    SkillBased,
    WorkloadBalanced,
    PriorityBased,
    #[default]
    Hybrid,
    Custom,
}

impl Algorithm {
    pub const PRESETS: [Algorithm; 4] = [
        Algorithm::SkillBased,
        Algorithm::WorkloadBalanced,
        Algorithm::PriorityBased,
        Algorithm::Hybrid,
    ];

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_tag(s).replace(['_', ' '], "-").as_str() {
            "skill-based" | "skill" => Some(Self::SkillBased),
            "workload-balanced" | "workload" => Some(Self::WorkloadBalanced),
            "priority-based" | "priority" => Some(Self::PriorityBased),
            "hybrid" => Some(Self::Hybrid),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkillBased => "skill-based",
            Self::WorkloadBalanced => "workload-balanced",
            Self::PriorityBased => "priority-based",
            Self::Hybrid => "hybrid",
            Self::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SkillBased => "Skill-Based",
            Self::WorkloadBalanced => "Workload Balanced",
            Self::PriorityBased => "Priority-Based",
            Self::Hybrid => "Hybrid",
            Self::Custom => "Custom",
        }
    }
}

/// Weights of the four scoring factors. Unused factors weigh 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreWeights {
    pub skill_match: f64,
    pub workload_balance: f64,
    pub priority: f64,
    pub deadline: f64,
}

impl ScoreWeights {
    pub fn new(skill_match: f64, workload_balance: f64, priority: f64, deadline: f64) -> Self {
        Self {
            skill_match,
            workload_balance,
            priority,
            deadline,
        }
    }

    pub fn sum(&self) -> f64 {
        self.skill_match + self.workload_balance + self.priority + self.deadline
    }

    /// Informational only; scoring never rejects unnormalized weights
    pub fn is_normalized(&self) -> bool {
        self.sum() <= 1.0 + 1e-9
    }
}
