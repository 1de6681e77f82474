//! Snapshot document models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budgets::Budget;
use crate::categories::{default_categories, Category};
use crate::goals::Goal;
use crate::transactions::Transaction;
use crate::users::User;

/// The complete exported/imported representation of the store.
///
/// `version` and `transactions` are the minimum contract an imported
/// document must satisfy; every other collection defaults when absent.
/// `export_date` is informational only and excluded from round-trip
/// comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: String,
    #[serde(default = "Utc::now")]
    pub export_date: DateTime<Utc>,
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub current_user: Option<String>,
}

/// Per-collection counts plus the approximate persisted size, as shown by
/// the settings storage panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub transactions: usize,
    pub goals: usize,
    pub users: usize,
    pub budgets: usize,
    pub categories: usize,
    pub approximate_size_bytes: usize,
}
