//! Reporting models: filters, windows and aggregation results.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::transactions::TransactionType;

/// Report period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// The seven days up to and including the reference day.
    Week,
    /// The full calendar month containing the reference day.
    Month,
    /// The full 3-month block containing the reference day.
    Quarter,
    /// The full calendar year containing the reference day.
    Year,
    /// Caller-supplied bounds; either one missing falls back to the month
    /// window.
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// Inclusive [start, end] date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Transaction direction filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionType::Income,
            TypeFilter::Expense => kind == TransactionType::Expense,
        }
    }
}

/// Composed report filter; period, type and category narrow by conjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub period: Period,
    pub kind: TypeFilter,
    /// `None` means every category.
    pub category: Option<String>,
}

impl Default for ReportFilter {
    fn default() -> Self {
        ReportFilter {
            period: Period::Month,
            kind: TypeFilter::All,
            category: None,
        }
    }
}

/// Totals over a filtered transaction sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub count: usize,
}

/// One category's share of a filtered transaction sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownEntry {
    pub category: Category,
    pub amount: Decimal,
    pub count: usize,
    /// Share of the sequence's income + expenses, in percent; 0 when the
    /// denominator is 0.
    pub percentage: f64,
}

/// Income/expense totals of one calendar month, keyed "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}
