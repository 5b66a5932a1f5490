//! Manual override model
//!
//! A user-forced (item, member, days) allocation, honored ahead of automatic
//! assignment when the member still has the capacity for it.

use qp_core::types::{Days, ItemId, MemberId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManualOverride {
    pub item_id: ItemId,
    pub member_id: MemberId,
    pub days_assigned: Days,
    #[serde(default = "default_true")]
    pub active: bool,
    pub reason: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ManualOverride {
    pub fn new(item_id: impl Into<ItemId>, member_id: impl Into<MemberId>, days_assigned: Days) -> Self {
        Self {
            item_id: item_id.into(),
            member_id: member_id.into(),
            days_assigned,
            active: true,
            reason: None,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn applies_to(&self, item_id: &str) -> bool {
        self.active && self.item_id == item_id
    }
}
