//! Budgets module - domain models only.

mod budgets_model;

pub use budgets_model::{Budget, BudgetPeriod};
