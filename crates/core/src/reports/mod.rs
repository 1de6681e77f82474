//! Reports module - period filtering, aggregation and CSV export.

mod csv_exporter;
mod reports_model;
mod reports_service;

#[cfg(test)]
mod csv_exporter_tests;
#[cfg(test)]
mod reports_service_tests;

pub use csv_exporter::{transactions_to_csv, CSV_HEADERS};
pub use reports_model::{
    CategoryBreakdownEntry, DateRange, MonthlyTrendPoint, Period, ReportFilter, Summary,
    TypeFilter,
};
pub use reports_service::{
    category_breakdown, compute_summary, current_month_summary, filter_transactions, for_user,
    monthly_trend, resolve_period,
};
