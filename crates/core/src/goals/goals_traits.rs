use rust_decimal::Decimal;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};

/// Trait for goal service operations.
pub trait GoalServiceTrait: Send + Sync {
    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn update_goal(&self, id: &str, update: GoalUpdate) -> Result<()>;
    fn delete_goal(&self, id: &str) -> Result<()>;
    fn toggle_active(&self, id: &str) -> Result<()>;
    fn add_funds(&self, id: &str, amount: Decimal) -> Result<()>;
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
}
