use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserUpdate};

/// Trait for user profile service operations.
pub trait UserServiceTrait: Send + Sync {
    fn create_user(&self, new_user: NewUser) -> Result<User>;
    fn update_user(&self, id: &str, update: UserUpdate) -> Result<()>;
    /// Removes a profile and that profile's transactions. Refuses to remove
    /// the last remaining profile or the current one.
    fn delete_user(&self, id: &str) -> Result<()>;
    fn switch_user(&self, id: &str) -> Result<()>;
    fn get_users(&self) -> Result<Vec<User>>;
    fn get_current_user(&self) -> Result<Option<User>>;
}
