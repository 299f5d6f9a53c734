use super::{balance::Balance, event::Event, settlement::Transfer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryStats {
    pub sum: Decimal,
    pub count: usize,
    pub mean: Decimal,
}

/// Everything the summary page needs for one event, as raw numbers.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EventSummary {
    pub event: Event,
    pub total: Decimal,
    pub fair_share: Decimal,
    pub participant_count: usize,
    pub expense_count: usize,
    pub totals_by_participant: BTreeMap<String, Decimal>,
    pub totals_by_category: BTreeMap<String, Decimal>,
    pub balances: Vec<Balance>,
    pub transfers: Vec<Transfer>,
    pub category_stats: BTreeMap<String, CategoryStats>,
}
