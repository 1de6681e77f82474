//! Tests for period resolution, filtering and aggregation.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::categories::default_categories;
    use crate::reports::{
        category_breakdown, compute_summary, current_month_summary, filter_transactions,
        for_user, monthly_trend, resolve_period, Period, ReportFilter, TypeFilter,
    };
    use crate::transactions::{Transaction, TransactionType};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn tx(
        id: &str,
        kind: TransactionType,
        amount: Decimal,
        category: &str,
        on: NaiveDate,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind,
            amount,
            category: category.to_string(),
            description: format!("lançamento {}", id),
            date: on,
            tags: Vec::new(),
            user_id: "user-1".to_string(),
            recurring: None,
        }
    }

    // ==================== Period resolution ====================

    #[test]
    fn test_month_window_covers_the_whole_calendar_month() {
        let window = resolve_period(Period::Month, date(2026, 8, 6));
        assert_eq!(window.start, date(2026, 8, 1));
        assert_eq!(window.end, date(2026, 8, 31));
    }

    #[test]
    fn test_week_window_ends_at_the_reference_day() {
        let window = resolve_period(Period::Week, date(2026, 8, 6));
        assert_eq!(window.start, date(2026, 7, 30));
        assert_eq!(window.end, date(2026, 8, 6));
    }

    #[test]
    fn test_quarter_window_is_the_current_three_month_block() {
        let window = resolve_period(Period::Quarter, date(2026, 8, 6));
        assert_eq!(window.start, date(2026, 7, 1));
        assert_eq!(window.end, date(2026, 9, 30));

        let first_quarter = resolve_period(Period::Quarter, date(2026, 2, 14));
        assert_eq!(first_quarter.start, date(2026, 1, 1));
        assert_eq!(first_quarter.end, date(2026, 3, 31));
    }

    #[test]
    fn test_year_window() {
        let window = resolve_period(Period::Year, date(2026, 8, 6));
        assert_eq!(window.start, date(2026, 1, 1));
        assert_eq!(window.end, date(2026, 12, 31));
    }

    #[test]
    fn test_custom_window_uses_supplied_bounds() {
        let window = resolve_period(
            Period::Custom {
                start: Some(date(2026, 3, 10)),
                end: Some(date(2026, 4, 20)),
            },
            date(2026, 8, 6),
        );
        assert_eq!(window.start, date(2026, 3, 10));
        assert_eq!(window.end, date(2026, 4, 20));
    }

    #[test]
    fn test_custom_window_with_missing_bound_falls_back_to_month() {
        let window = resolve_period(
            Period::Custom {
                start: Some(date(2026, 3, 10)),
                end: None,
            },
            date(2026, 8, 6),
        );
        assert_eq!(window.start, date(2026, 8, 1));
        assert_eq!(window.end, date(2026, 8, 31));
    }

    // ==================== Filtering ====================

    #[test]
    fn test_filters_compose_by_conjunction() {
        let today = date(2026, 8, 6);
        let transactions = vec![
            tx("a", TransactionType::Income, dec!(100), "salary", date(2026, 8, 1)),
            tx("b", TransactionType::Expense, dec!(30), "food", date(2026, 8, 2)),
            // Same category, wrong type:
            tx("c", TransactionType::Income, dec!(10), "food", date(2026, 8, 3)),
            // Right type and category, outside the window:
            tx("d", TransactionType::Expense, dec!(50), "food", date(2026, 7, 20)),
        ];

        let filter = ReportFilter {
            period: Period::Month,
            kind: TypeFilter::Expense,
            category: Some("food".to_string()),
        };
        let filtered = filter_transactions(&transactions, &filter, today);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "b");
    }

    #[test]
    fn test_filter_includes_window_bounds() {
        let today = date(2026, 8, 6);
        let transactions = vec![
            tx("first", TransactionType::Expense, dec!(1), "food", date(2026, 8, 1)),
            tx("last", TransactionType::Expense, dec!(1), "food", date(2026, 8, 31)),
        ];

        let filtered = filter_transactions(&transactions, &ReportFilter::default(), today);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filtered_transactions_are_sorted_newest_first() {
        let today = date(2026, 8, 6);
        let transactions = vec![
            tx("old", TransactionType::Expense, dec!(1), "food", date(2026, 8, 1)),
            tx("new", TransactionType::Expense, dec!(1), "food", date(2026, 8, 5)),
            tx("mid", TransactionType::Expense, dec!(1), "food", date(2026, 8, 3)),
        ];

        let filtered = filter_transactions(&transactions, &ReportFilter::default(), today);
        let ids: Vec<_> = filtered.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    // ==================== Summary ====================

    #[test]
    fn test_summary_totals() {
        let on = date(2026, 8, 3);
        let transactions = vec![
            tx("a", TransactionType::Income, dec!(100), "salary", on),
            tx("b", TransactionType::Income, dec!(50), "freelance", on),
            tx("c", TransactionType::Expense, dec!(30), "food", on),
        ];

        let summary = compute_summary(&transactions);
        assert_eq!(summary.income, dec!(150));
        assert_eq!(summary.expenses, dec!(30));
        assert_eq!(summary.balance, dec!(120));
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_summary_of_nothing_is_zero() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.income, Decimal::ZERO);
        assert_eq!(summary.expenses, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
        assert_eq!(summary.count, 0);
    }

    // ==================== Category breakdown ====================

    #[test]
    fn test_breakdown_groups_and_orders_by_amount() {
        let on = date(2026, 8, 3);
        let categories = default_categories();
        let transactions = vec![
            tx("a", TransactionType::Expense, dec!(40), "food", on),
            tx("b", TransactionType::Expense, dec!(10), "transport", on),
            tx("c", TransactionType::Expense, dec!(30), "food", on),
            tx("d", TransactionType::Expense, dec!(20), "food", on),
        ];

        let breakdown = category_breakdown(&transactions, &categories);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category.id, "food");
        assert_eq!(breakdown[0].amount, dec!(90));
        assert_eq!(breakdown[0].count, 3);
        assert!((breakdown[0].percentage - 90.0).abs() < 1e-9);
        assert_eq!(breakdown[1].category.id, "transport");
        assert_eq!(breakdown[1].amount, dec!(10));
        assert_eq!(breakdown[1].count, 1);
        assert!((breakdown[1].percentage - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_tie_keeps_first_appearance_order() {
        let on = date(2026, 8, 3);
        let categories = default_categories();
        let transactions = vec![
            tx("a", TransactionType::Expense, dec!(25), "transport", on),
            tx("b", TransactionType::Expense, dec!(25), "food", on),
        ];

        let breakdown = category_breakdown(&transactions, &categories);
        let ids: Vec<_> = breakdown.iter().map(|e| e.category.id.as_str()).collect();
        assert_eq!(ids, vec!["transport", "food"]);
    }

    #[test]
    fn test_breakdown_drops_unknown_category_but_keeps_denominator() {
        let on = date(2026, 8, 3);
        let categories = default_categories();
        let transactions = vec![
            tx("a", TransactionType::Expense, dec!(50), "food", on),
            tx("b", TransactionType::Expense, dec!(50), "no-such-category", on),
        ];

        let breakdown = category_breakdown(&transactions, &categories);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category.id, "food");
        // The orphaned half still counts towards the total.
        assert!((breakdown[0].percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_of_nothing_is_empty() {
        assert!(category_breakdown(&[], &default_categories()).is_empty());
    }

    // ==================== Monthly trend ====================

    #[test]
    fn test_trend_always_has_six_months_oldest_first() {
        let trend = monthly_trend(&[], date(2026, 8, 15));
        let months: Vec<_> = trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["2026-03", "2026-04", "2026-05", "2026-06", "2026-07", "2026-08"]
        );
        assert!(trend
            .iter()
            .all(|p| p.income == Decimal::ZERO && p.expenses == Decimal::ZERO));
    }

    #[test]
    fn test_trend_window_crosses_year_boundaries() {
        let trend = monthly_trend(&[], date(2026, 1, 10));
        let months: Vec<_> = trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["2025-08", "2025-09", "2025-10", "2025-11", "2025-12", "2026-01"]
        );
    }

    #[test]
    fn test_trend_buckets_by_calendar_month() {
        let today = date(2026, 8, 15);
        let transactions = vec![
            tx("a", TransactionType::Income, dec!(1000), "salary", date(2026, 6, 5)),
            tx("b", TransactionType::Expense, dec!(200), "food", date(2026, 6, 20)),
            tx("c", TransactionType::Expense, dec!(75), "food", date(2026, 8, 1)),
            // Older than the six-month window: ignored.
            tx("d", TransactionType::Income, dec!(9999), "salary", date(2026, 1, 1)),
        ];

        let trend = monthly_trend(&transactions, today);

        let june = trend.iter().find(|p| p.month == "2026-06").unwrap();
        assert_eq!(june.income, dec!(1000));
        assert_eq!(june.expenses, dec!(200));

        let august = trend.iter().find(|p| p.month == "2026-08").unwrap();
        assert_eq!(august.income, Decimal::ZERO);
        assert_eq!(august.expenses, dec!(75));

        let march = trend.iter().find(|p| p.month == "2026-03").unwrap();
        assert_eq!(march.income, Decimal::ZERO);
    }

    // ==================== Month slice and ownership helpers ====================

    #[test]
    fn test_current_month_summary_ignores_other_months() {
        let today = date(2026, 8, 6);
        let transactions = vec![
            tx("a", TransactionType::Income, dec!(100), "salary", date(2026, 8, 1)),
            tx("b", TransactionType::Expense, dec!(40), "food", date(2026, 8, 20)),
            tx("c", TransactionType::Income, dec!(500), "salary", date(2026, 7, 31)),
        ];

        let summary = current_month_summary(&transactions, today);
        assert_eq!(summary.income, dec!(100));
        assert_eq!(summary.expenses, dec!(40));
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn test_for_user_keeps_only_that_users_entries() {
        let on = date(2026, 8, 3);
        let mut mine = tx("a", TransactionType::Expense, dec!(10), "food", on);
        mine.user_id = "u1".to_string();
        let mut theirs = tx("b", TransactionType::Expense, dec!(20), "food", on);
        theirs.user_id = "u2".to_string();

        let filtered = for_user(&[mine.clone(), theirs], "u1");
        assert_eq!(filtered, vec![mine]);
    }
}
