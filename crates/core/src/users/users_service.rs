use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserUpdate};
use super::users_traits::UserServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::store::StoreTrait;

/// Service for managing family member profiles.
pub struct UserService {
    store: Arc<dyn StoreTrait>,
}

impl UserService {
    pub fn new(store: Arc<dyn StoreTrait>) -> Self {
        UserService { store }
    }
}

impl UserServiceTrait for UserService {
    /// Validates the input, assigns an id and persists the new profile.
    fn create_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let user = new_user.into_user(self.store.generate_id(), Utc::now());
        debug!("creating user '{}' ({})", user.name, user.id);
        self.store.add_user(user.clone())?;
        Ok(user)
    }

    fn update_user(&self, id: &str, update: UserUpdate) -> Result<()> {
        self.store.update_user(id, &update)
    }

    /// The store does not cascade; the manual removal of the profile's
    /// transactions lives here.
    fn delete_user(&self, id: &str) -> Result<()> {
        let users = self.store.get_users()?;
        if users.len() <= 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "At least one user must remain".to_string(),
            )));
        }
        if self.store.current_user_id()?.as_deref() == Some(id) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "The current user cannot be deleted".to_string(),
            )));
        }

        self.store.delete_user(id)?;

        let remaining: Vec<_> = self
            .store
            .get_transactions()?
            .into_iter()
            .filter(|t| t.user_id != id)
            .collect();
        self.store.save_transactions(&remaining)
    }

    /// Points the store's current-user pointer at `id`. The pointer is not
    /// validated against the collection; a dangling pointer resolves to no
    /// current user on read.
    fn switch_user(&self, id: &str) -> Result<()> {
        self.store.set_current_user(id)
    }

    fn get_users(&self) -> Result<Vec<User>> {
        self.store.get_users()
    }

    fn get_current_user(&self) -> Result<Option<User>> {
        self.store.current_user()
    }
}
