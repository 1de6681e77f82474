//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::transactions::transactions_constants::*;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => TRANSACTION_TYPE_INCOME,
            TransactionType::Expense => TRANSACTION_TYPE_EXPENSE,
        }
    }

    /// Localized label used by the CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Receita",
            TransactionType::Expense => "Despesa",
        }
    }
}

/// Repeat cadence of a recurring transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringFrequency::Daily => FREQUENCY_DAILY,
            RecurringFrequency::Weekly => FREQUENCY_WEEKLY,
            RecurringFrequency::Monthly => FREQUENCY_MONTHLY,
            RecurringFrequency::Yearly => FREQUENCY_YEARLY,
        }
    }
}

/// Recurrence marker carried by a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringRule {
    pub frequency: RecurringFrequency,
    pub next_date: NaiveDate,
}

/// Domain model representing one income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    /// References `Category::id`.
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringRule>,
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringRule>,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction amount must be greater than zero".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "category".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "description".to_string(),
            )));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the stored record from this input and a store-generated id.
    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            tags: self.tags,
            user_id: self.user_id,
            recurring: self.recurring,
        }
    }
}

/// Partial-field patch applied over a stored transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub tags: Option<Vec<String>>,
    pub recurring: Option<RecurringRule>,
}

impl TransactionUpdate {
    /// Shallow-merges the present fields over the stored record.
    pub fn apply(&self, transaction: &mut Transaction) {
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(ref category) = self.category {
            transaction.category = category.clone();
        }
        if let Some(ref description) = self.description {
            transaction.description = description.clone();
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(ref tags) = self.tags {
            transaction.tags = tags.clone();
        }
        if let Some(ref recurring) = self.recurring {
            transaction.recurring = Some(recurring.clone());
        }
    }
}

/// Parses a user-typed amount, accepting a decimal comma ("12,50").
///
/// Thousands separators are not supported; positivity is checked by
/// `NewTransaction::validate`, not here.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "amount".to_string(),
        )));
    }
    let amount = normalized.parse::<Decimal>()?;
    Ok(amount)
}
