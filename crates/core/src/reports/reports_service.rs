//! Aggregation over loaded collections.
//!
//! Everything here is a pure function: no store access, no clock access.
//! The reference day is an explicit parameter so reports are deterministic.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use log::warn;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::categories::Category;
use crate::constants::TREND_MONTHS;
use crate::reports::reports_model::{
    CategoryBreakdownEntry, DateRange, MonthlyTrendPoint, Period, ReportFilter, Summary,
};
use crate::transactions::{Transaction, TransactionType};
use crate::utils::time_utils::{
    end_of_month, month_key, quarter_bounds, shift_months, start_of_month, year_bounds,
};

/// Resolves a period selector to its inclusive date window.
pub fn resolve_period(period: Period, today: NaiveDate) -> DateRange {
    let month_window = DateRange {
        start: start_of_month(today),
        end: end_of_month(today),
    };
    match period {
        Period::Week => DateRange {
            start: today - Duration::days(7),
            end: today,
        },
        Period::Month => month_window,
        Period::Quarter => {
            let (start, end) = quarter_bounds(today);
            DateRange { start, end }
        }
        Period::Year => {
            let (start, end) = year_bounds(today);
            DateRange { start, end }
        }
        Period::Custom { start, end } => match (start, end) {
            (Some(start), Some(end)) => DateRange { start, end },
            _ => month_window,
        },
    }
}

/// Applies type, category and period filters (conjunction), newest first.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &ReportFilter,
    today: NaiveDate,
) -> Vec<Transaction> {
    let window = resolve_period(filter.period, today);
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.kind.matches(t.kind))
        .filter(|t| {
            filter
                .category
                .as_ref()
                .map_or(true, |category| &t.category == category)
        })
        .filter(|t| window.contains(t.date))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Totals a transaction sequence. Sums keep full decimal precision; rounding
/// is the presentation layer's concern.
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for transaction in transactions {
        match transaction.kind {
            TransactionType::Income => income += transaction.amount,
            TransactionType::Expense => expenses += transaction.amount,
        }
    }
    Summary {
        income,
        expenses,
        balance: income - expenses,
        count: transactions.len(),
    }
}

/// Groups a filtered sequence by category, ordered by summed amount
/// descending (stable w.r.t. first appearance).
///
/// A transaction whose category id no longer resolves is flagged and left
/// out of the breakdown; its amount still counts towards the percentage
/// denominator.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategoryBreakdownEntry> {
    let summary = compute_summary(transactions);
    let total = summary.income + summary.expenses;

    let mut entries: Vec<CategoryBreakdownEntry> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        let Some(category) = categories.iter().find(|c| c.id == transaction.category) else {
            warn!(
                "transaction '{}' references unknown category '{}'; dropped from breakdown",
                transaction.id, transaction.category
            );
            continue;
        };
        match index_by_id.get(&transaction.category) {
            Some(&index) => {
                entries[index].amount += transaction.amount;
                entries[index].count += 1;
            }
            None => {
                index_by_id.insert(transaction.category.clone(), entries.len());
                entries.push(CategoryBreakdownEntry {
                    category: category.clone(),
                    amount: transaction.amount,
                    count: 1,
                    percentage: 0.0,
                });
            }
        }
    }

    for entry in &mut entries {
        entry.percentage = if total > Decimal::ZERO {
            (entry.amount / total * Decimal::from(100))
                .to_f64()
                .unwrap_or(0.0)
        } else {
            0.0
        };
    }

    entries.sort_by(|a, b| b.amount.cmp(&a.amount));
    entries
}

/// Per-month income/expense totals for the six calendar months ending at
/// the reference month, oldest first, over the *unfiltered* transaction set.
/// Months without transactions report zero.
pub fn monthly_trend(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthlyTrendPoint> {
    let mut points: Vec<MonthlyTrendPoint> = (0..TREND_MONTHS)
        .rev()
        .map(|offset| MonthlyTrendPoint {
            month: month_key(shift_months(today, -(offset as i32))),
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        })
        .collect();

    let index_by_month: HashMap<String, usize> = points
        .iter()
        .enumerate()
        .map(|(index, point)| (point.month.clone(), index))
        .collect();

    for transaction in transactions {
        if let Some(&index) = index_by_month.get(&month_key(transaction.date)) {
            match transaction.kind {
                TransactionType::Income => points[index].income += transaction.amount,
                TransactionType::Expense => points[index].expenses += transaction.amount,
            }
        }
    }

    points
}

/// Summary of the calendar month containing the reference day.
pub fn current_month_summary(transactions: &[Transaction], today: NaiveDate) -> Summary {
    let window = DateRange {
        start: start_of_month(today),
        end: end_of_month(today),
    };
    let month_slice: Vec<Transaction> = transactions
        .iter()
        .filter(|t| window.contains(t.date))
        .cloned()
        .collect();
    compute_summary(&month_slice)
}

/// Narrows a transaction set to one user's entries, preserving order.
pub fn for_user(transactions: &[Transaction], user_id: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.user_id == user_id)
        .cloned()
        .collect()
}
