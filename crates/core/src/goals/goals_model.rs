//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GOAL_CATEGORY;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a savings goal.
///
/// Completion is derived from the amounts; `is_active` is an independent
/// visibility flag (a completed goal stays visible until archived).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    /// Free-text label, not a `Category::id`.
    pub category: String,
    pub user_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// A goal is complete once the saved amount reaches the target,
    /// regardless of `is_active`.
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Progress towards the target as a display percentage, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= Decimal::ZERO {
            return 0.0;
        }
        let ratio = (self.current_amount / self.target_amount * Decimal::from(100))
            .to_f64()
            .unwrap_or(0.0);
        ratio.min(100.0)
    }
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_amount: Decimal,
    /// Starting amount; defaults to zero.
    pub current_amount: Option<Decimal>,
    pub deadline: NaiveDate,
    /// Defaults to "Geral" when not supplied.
    pub category: Option<String>,
    pub user_id: String,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal target amount must be greater than zero".to_string(),
            )));
        }
        if let Some(current) = self.current_amount {
            if current < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Goal current amount cannot be negative".to_string(),
                )));
            }
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the stored record from this input, a store-generated id and a
    /// creation timestamp. New goals start active.
    pub fn into_goal(self, id: String, created_at: DateTime<Utc>) -> Goal {
        Goal {
            id,
            title: self.title,
            description: self.description,
            target_amount: self.target_amount,
            current_amount: self.current_amount.unwrap_or(Decimal::ZERO),
            deadline: self.deadline,
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_GOAL_CATEGORY.to_string()),
            user_id: self.user_id,
            is_active: true,
            created_at,
        }
    }
}

/// Partial-field patch applied over a stored goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl GoalUpdate {
    /// Shallow-merges the present fields over the stored record.
    pub fn apply(&self, goal: &mut Goal) {
        if let Some(ref title) = self.title {
            goal.title = title.clone();
        }
        if let Some(ref description) = self.description {
            goal.description = description.clone();
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            goal.current_amount = current_amount;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
        if let Some(ref category) = self.category {
            goal.category = category.clone();
        }
        if let Some(is_active) = self.is_active {
            goal.is_active = is_active;
        }
    }
}
