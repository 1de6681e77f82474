//! Tests for goal models, completion and progress.

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::goals::{Goal, GoalUpdate, NewGoal};

    fn new_goal() -> NewGoal {
        NewGoal {
            title: "Reserva de emergência".to_string(),
            description: "Seis meses de despesas".to_string(),
            target_amount: dec!(1000),
            current_amount: None,
            deadline: NaiveDate::from_ymd_opt(2027, 6, 30).unwrap(),
            category: None,
            user_id: "user-1".to_string(),
        }
    }

    fn goal() -> Goal {
        new_goal().into_goal("g1".to_string(), Utc::now())
    }

    // ==================== Completion and progress ====================

    #[test]
    fn test_goal_is_complete_when_current_reaches_target() {
        let mut goal = goal();
        goal.current_amount = dec!(1000);
        // Completion ignores the visibility flag.
        goal.is_active = false;
        assert!(goal.is_complete());
    }

    #[test]
    fn test_goal_can_exceed_its_target() {
        let mut goal = goal();
        goal.current_amount = dec!(1500);
        assert!(goal.is_complete());
        assert_eq!(goal.progress_percent(), 100.0);
    }

    #[test]
    fn test_progress_percent_below_target() {
        let mut goal = goal();
        goal.current_amount = dec!(250);
        assert!((goal.progress_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_guards_against_a_corrupt_zero_target() {
        let mut goal = goal();
        goal.target_amount = dec!(0);
        assert_eq!(goal.progress_percent(), 0.0);
    }

    // ==================== Defaults and validation ====================

    #[test]
    fn test_new_goal_defaults() {
        let goal = goal();
        assert_eq!(goal.category, "Geral");
        assert_eq!(goal.current_amount, dec!(0));
        assert!(goal.is_active);
    }

    #[test]
    fn test_validate_rejects_blank_title_and_bad_amounts() {
        let mut no_title = new_goal();
        no_title.title = "  ".to_string();
        assert!(matches!(no_title.validate(), Err(Error::Validation(_))));

        let mut zero_target = new_goal();
        zero_target.target_amount = dec!(0);
        assert!(zero_target.validate().is_err());

        let mut negative_current = new_goal();
        negative_current.current_amount = Some(dec!(-1));
        assert!(negative_current.validate().is_err());

        assert!(new_goal().validate().is_ok());
    }

    // ==================== Patch application ====================

    #[test]
    fn test_update_applies_only_present_fields() {
        let mut goal = goal();
        let update = GoalUpdate {
            current_amount: Some(dec!(400)),
            is_active: Some(false),
            ..GoalUpdate::default()
        };

        update.apply(&mut goal);

        assert_eq!(goal.current_amount, dec!(400));
        assert!(!goal.is_active);
        assert_eq!(goal.title, "Reserva de emergência");
        assert_eq!(goal.target_amount, dec!(1000));
    }

    #[test]
    fn test_goal_serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&goal()).unwrap();
        // Amounts go to the wire as plain JSON numbers (serde-float).
        assert!(json.contains("\"targetAmount\":1000.0"));
        assert!(json.contains("\"currentAmount\":0.0"));
        assert!(json.contains("\"isActive\":true"));
        assert!(json.contains("\"userId\":\"user-1\""));
    }
}
