use chrono::{Datelike, Months, NaiveDate};

/// First calendar day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// Shifts `date` by whole months, clamping the day to the target month's
/// length (Jan 31 − 1 month = Dec 31, Mar 31 − 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Canonical "YYYY-MM" key used to bucket transactions by calendar month.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Inclusive first/last day of the 3-month block containing `date`.
pub fn quarter_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let quarter_start_month = ((date.month0() / 3) * 3) + 1;
    let start = NaiveDate::from_ymd_opt(date.year(), quarter_start_month, 1).unwrap_or(date);
    (start, end_of_month(shift_months(start, 2)))
}

/// Inclusive Jan 1 / Dec 31 of `date`'s year.
pub fn year_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let end = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
    (start, end)
}
