//! The persistence store: collection CRUD and snapshot handling over a raw
//! key-value backend.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use rand::{distributions::Alphanumeric, Rng};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::budgets::Budget;
use crate::categories::{default_categories, Category};
use crate::constants::{
    ALL_KEYS, DEFAULT_USER_AVATAR, DEFAULT_USER_ID, DEFAULT_USER_NAME, ID_SUFFIX_LEN,
    KEY_BUDGETS, KEY_CATEGORIES, KEY_CURRENT_USER, KEY_GOALS, KEY_TRANSACTIONS, KEY_USERS,
    KEY_VERSION, SCHEMA_VERSION,
};
use crate::errors::{Result, SnapshotError, StorageError};
use crate::goals::{Goal, GoalUpdate};
use crate::store::snapshot_model::{Snapshot, StoreStats};
use crate::store::store_traits::{StorageBackend, StoreTrait};
use crate::transactions::{Transaction, TransactionUpdate};
use crate::users::{ColorScheme, Theme, User, UserUpdate};

/// Single source of truth for all persisted collections.
///
/// Constructed once at process start over a backend and injected into every
/// consumer. Mutations rewrite the whole affected collection; acceptable at
/// the target data scale (single household, thousands of records).
pub struct LocalStore {
    backend: Arc<dyn StorageBackend>,
}

impl LocalStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        LocalStore { backend }
    }

    /// Reads a collection, degrading to empty when the key is absent or the
    /// payload no longer parses.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.read(key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(err) => {
                    warn!("discarding unparseable collection at '{}': {}", key, err);
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.backend.write(key, &raw)
    }

    fn update_in<T, F>(&self, key: &str, id: &str, matches: F, patch: impl Fn(&mut T)) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = self.read_collection(key)?;
        match items.iter_mut().find(|item| matches(item)) {
            Some(item) => {
                patch(item);
                self.write_collection(key, &items)
            }
            None => {
                debug!("update for unknown id '{}' at '{}' ignored", id, key);
                Ok(())
            }
        }
    }

    fn delete_in<T, F>(&self, key: &str, keep: F) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = self.read_collection(key)?;
        items.retain(|item| keep(item));
        self.write_collection(key, &items)
    }

    fn default_user(&self) -> User {
        User {
            id: DEFAULT_USER_ID.to_string(),
            name: DEFAULT_USER_NAME.to_string(),
            avatar: DEFAULT_USER_AVATAR.to_string(),
            theme: Theme::Light,
            color_scheme: ColorScheme::Default,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

impl StoreTrait for LocalStore {
    fn initialize(&self) -> Result<()> {
        let stored_version = self.backend.read(KEY_VERSION)?;
        if stored_version.as_deref() == Some(SCHEMA_VERSION) {
            return Ok(());
        }
        debug!(
            "initializing store (stored version: {:?}, current: {})",
            stored_version, SCHEMA_VERSION
        );

        if self.backend.read(KEY_CATEGORIES)?.is_none() {
            self.write_collection(KEY_CATEGORIES, &default_categories())?;
        }
        if self.backend.read(KEY_USERS)?.is_none() {
            let default_user = self.default_user();
            self.write_collection(KEY_USERS, &[default_user])?;
            self.backend.write(KEY_CURRENT_USER, DEFAULT_USER_ID)?;
        }
        self.backend.write(KEY_VERSION, SCHEMA_VERSION)
    }

    // === Transactions ===

    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.read_collection(KEY_TRANSACTIONS)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write_collection(KEY_TRANSACTIONS, transactions)
    }

    fn add_transaction(&self, transaction: Transaction) -> Result<()> {
        let mut transactions = self.get_transactions()?;
        transactions.push(transaction);
        self.save_transactions(&transactions)
    }

    fn update_transaction(&self, id: &str, update: &TransactionUpdate) -> Result<()> {
        self.update_in(
            KEY_TRANSACTIONS,
            id,
            |t: &Transaction| t.id == id,
            |t| update.apply(t),
        )
    }

    fn delete_transaction(&self, id: &str) -> Result<()> {
        self.delete_in(KEY_TRANSACTIONS, |t: &Transaction| t.id != id)
    }

    // === Goals ===

    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.read_collection(KEY_GOALS)
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        self.write_collection(KEY_GOALS, goals)
    }

    fn add_goal(&self, goal: Goal) -> Result<()> {
        let mut goals = self.get_goals()?;
        goals.push(goal);
        self.save_goals(&goals)
    }

    fn update_goal(&self, id: &str, update: &GoalUpdate) -> Result<()> {
        self.update_in(KEY_GOALS, id, |g: &Goal| g.id == id, |g| update.apply(g))
    }

    fn delete_goal(&self, id: &str) -> Result<()> {
        self.delete_in(KEY_GOALS, |g: &Goal| g.id != id)
    }

    // === Users ===

    fn get_users(&self) -> Result<Vec<User>> {
        self.read_collection(KEY_USERS)
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        self.write_collection(KEY_USERS, users)
    }

    fn add_user(&self, user: User) -> Result<()> {
        let mut users = self.get_users()?;
        users.push(user);
        self.save_users(&users)
    }

    fn update_user(&self, id: &str, update: &UserUpdate) -> Result<()> {
        self.update_in(KEY_USERS, id, |u: &User| u.id == id, |u| update.apply(u))
    }

    fn delete_user(&self, id: &str) -> Result<()> {
        self.delete_in(KEY_USERS, |u: &User| u.id != id)
    }

    // === Budgets ===

    fn get_budgets(&self) -> Result<Vec<Budget>> {
        self.read_collection(KEY_BUDGETS)
    }

    fn save_budgets(&self, budgets: &[Budget]) -> Result<()> {
        self.write_collection(KEY_BUDGETS, budgets)
    }

    // === Categories ===

    fn get_categories(&self) -> Result<Vec<Category>> {
        match self.backend.read(KEY_CATEGORIES)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(categories) => Ok(categories),
                Err(err) => {
                    warn!("discarding unparseable category collection: {}", err);
                    Ok(default_categories())
                }
            },
            None => Ok(default_categories()),
        }
    }

    fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.write_collection(KEY_CATEGORIES, categories)
    }

    // === Current-user pointer ===

    fn current_user_id(&self) -> Result<Option<String>> {
        self.backend.read(KEY_CURRENT_USER)
    }

    fn current_user(&self) -> Result<Option<User>> {
        let Some(pointer) = self.current_user_id()? else {
            return Ok(None);
        };
        let users = self.get_users()?;
        Ok(users.into_iter().find(|u| u.id == pointer))
    }

    fn set_current_user(&self, user_id: &str) -> Result<()> {
        self.backend.write(KEY_CURRENT_USER, user_id)
    }

    // === Utilities ===

    fn generate_id(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect();
        format!("{}-{}", millis, suffix)
    }

    fn export_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            version: SCHEMA_VERSION.to_string(),
            export_date: Utc::now(),
            transactions: self.get_transactions()?,
            goals: self.get_goals()?,
            users: self.get_users()?,
            budgets: self.get_budgets()?,
            categories: self.get_categories()?,
            current_user: self.current_user_id()?,
        })
    }

    fn export_json(&self) -> Result<String> {
        let snapshot = self.export_snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|err| StorageError::Serialization(err.to_string()).into())
    }

    fn import_json(&self, json: &str) -> Result<()> {
        let snapshot = parse_snapshot(json)?;

        let mut entries = vec![
            (KEY_TRANSACTIONS.to_string(), to_json(&snapshot.transactions)?),
            (KEY_GOALS.to_string(), to_json(&snapshot.goals)?),
            (KEY_USERS.to_string(), to_json(&snapshot.users)?),
            (KEY_BUDGETS.to_string(), to_json(&snapshot.budgets)?),
            (KEY_CATEGORIES.to_string(), to_json(&snapshot.categories)?),
        ];
        if let Some(ref current_user) = snapshot.current_user {
            entries.push((KEY_CURRENT_USER.to_string(), current_user.clone()));
        }
        self.backend.write_many(&entries)
    }

    fn clear_all(&self) -> Result<()> {
        for key in ALL_KEYS {
            self.backend.remove(key)?;
        }
        self.initialize()
    }

    fn stats(&self) -> Result<StoreStats> {
        let mut approximate_size_bytes = 0;
        for key in ALL_KEYS {
            if let Some(raw) = self.backend.read(key)? {
                approximate_size_bytes += raw.len();
            }
        }
        Ok(StoreStats {
            transactions: self.get_transactions()?.len(),
            goals: self.get_goals()?.len(),
            users: self.get_users()?.len(),
            budgets: self.get_budgets()?.len(),
            categories: self.get_categories()?.len(),
            approximate_size_bytes,
        })
    }
}

fn to_json<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items).map_err(|err| StorageError::Serialization(err.to_string()).into())
}

/// Parses and validates an imported document: it must be JSON carrying a
/// version marker and a transactions collection.
fn parse_snapshot(json: &str) -> Result<Snapshot> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| SnapshotError::Parse(err.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(SnapshotError::Parse("document is not a JSON object".to_string()).into());
    };
    if !object.contains_key("version") {
        return Err(SnapshotError::MissingField("version").into());
    }
    if !object.contains_key("transactions") {
        return Err(SnapshotError::MissingField("transactions").into());
    }
    serde_json::from_value(value).map_err(|err| SnapshotError::Parse(err.to_string()).into())
}
