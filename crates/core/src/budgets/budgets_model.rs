//! Budget domain models.
//!
//! Budgets are persisted and round-tripped through snapshots, but no budget
//! logic runs in this core yet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reset cadence of a budget envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Weekly,
}

/// Domain model representing a per-category spending envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    /// References `Category::id`.
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub period: BudgetPeriod,
    pub user_id: String,
}
