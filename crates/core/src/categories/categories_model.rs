//! Category domain models.

use serde::{Deserialize, Serialize};

/// Which transaction directions a category applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    Both,
}

/// Domain model representing a transaction category.
///
/// Categories are seeded from a fixed default set on first run; runtime
/// editing is not part of this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}
