use serde::Serialize;

use crate::domain::Cents;

/// Point-in-time aggregate over everything the ledger holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub raw_material_count: usize,
    pub dish_count: usize,
    pub customer_count: usize,
    /// Sum of all dish prices
    pub menu_total: Cents,
    /// Sum of all raw material prices
    pub material_cost: Cents,
    pub gross_profit: Cents,
}
