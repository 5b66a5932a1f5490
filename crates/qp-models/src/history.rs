//! Past assignments, carried into enhanced generations

use qp_core::types::{Days, ItemId, MemberId};
use serde::{Deserialize, Serialize};

use crate::priority::ItemKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalAssignment {
    pub member_id: MemberId,
    pub item_id: ItemId,
    pub item_kind: ItemKind,
    pub days: Days,
}
