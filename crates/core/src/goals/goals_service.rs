use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::GoalServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::store::StoreTrait;

/// Service for managing savings goals.
pub struct GoalService {
    store: Arc<dyn StoreTrait>,
}

impl GoalService {
    pub fn new(store: Arc<dyn StoreTrait>) -> Self {
        GoalService { store }
    }

    fn find_goal(&self, id: &str) -> Result<Option<Goal>> {
        let goals = self.store.get_goals()?;
        Ok(goals.into_iter().find(|g| g.id == id))
    }
}

impl GoalServiceTrait for GoalService {
    /// Validates the input, assigns an id and persists the new goal.
    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        let goal = new_goal.into_goal(self.store.generate_id(), Utc::now());
        debug!("creating goal '{}' ({})", goal.title, goal.id);
        self.store.add_goal(goal.clone())?;
        Ok(goal)
    }

    fn update_goal(&self, id: &str, update: GoalUpdate) -> Result<()> {
        self.store.update_goal(id, &update)
    }

    fn delete_goal(&self, id: &str) -> Result<()> {
        self.store.delete_goal(id)
    }

    /// Flips the visibility flag. Unknown ids are a no-op, like every other
    /// by-id mutation.
    fn toggle_active(&self, id: &str) -> Result<()> {
        let Some(goal) = self.find_goal(id)? else {
            return Ok(());
        };
        self.store.update_goal(
            id,
            &GoalUpdate {
                is_active: Some(!goal.is_active),
                ..GoalUpdate::default()
            },
        )
    }

    /// Adds a positive amount to the goal's saved total.
    fn add_funds(&self, id: &str, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount to add must be greater than zero".to_string(),
            )));
        }
        let Some(goal) = self.find_goal(id)? else {
            return Ok(());
        };
        self.store.update_goal(
            id,
            &GoalUpdate {
                current_amount: Some(goal.current_amount + amount),
                ..GoalUpdate::default()
            },
        )
    }

    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.store.get_goals()
    }

    fn get_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let goals = self.store.get_goals()?;
        Ok(goals.into_iter().filter(|g| g.user_id == user_id).collect())
    }
}
