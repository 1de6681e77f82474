//! Store contract: the raw key-value medium and the collection store built
//! on top of it.

use crate::budgets::Budget;
use crate::categories::Category;
use crate::errors::Result;
use crate::goals::{Goal, GoalUpdate};
use crate::store::snapshot_model::{Snapshot, StoreStats};
use crate::transactions::{Transaction, TransactionUpdate};
use crate::users::{User, UserUpdate};

/// Raw persistence medium: string values addressed by string keys.
///
/// This is the seam the `storage-local` crate implements. Writes are atomic
/// at the medium level: a failed write leaves the previous value intact.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Writes every entry in one atomic step. Either all keys take their new
    /// value or none do.
    fn write_many(&self, entries: &[(String, String)]) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// The persistence store: versioned initialization, per-entity CRUD over
/// whole-collection writes, the current-user pointer and snapshot
/// export/import.
///
/// Update and delete on an unknown id are silent no-ops; callers operate on
/// freshly loaded lists.
pub trait StoreTrait: Send + Sync {
    /// Seeds defaults and writes the schema version. Idempotent: a matching
    /// version marker makes this a no-op.
    fn initialize(&self) -> Result<()>;

    // Transactions
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
    fn add_transaction(&self, transaction: Transaction) -> Result<()>;
    fn update_transaction(&self, id: &str, update: &TransactionUpdate) -> Result<()>;
    fn delete_transaction(&self, id: &str) -> Result<()>;

    // Goals
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn save_goals(&self, goals: &[Goal]) -> Result<()>;
    fn add_goal(&self, goal: Goal) -> Result<()>;
    fn update_goal(&self, id: &str, update: &GoalUpdate) -> Result<()>;
    fn delete_goal(&self, id: &str) -> Result<()>;

    // Users
    fn get_users(&self) -> Result<Vec<User>>;
    fn save_users(&self, users: &[User]) -> Result<()>;
    fn add_user(&self, user: User) -> Result<()>;
    fn update_user(&self, id: &str, update: &UserUpdate) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    // Budgets (shape only; no budget logic in this core)
    fn get_budgets(&self) -> Result<Vec<Budget>>;
    fn save_budgets(&self, budgets: &[Budget]) -> Result<()>;

    // Categories (default set when the key is absent)
    fn get_categories(&self) -> Result<Vec<Category>>;
    fn save_categories(&self, categories: &[Category]) -> Result<()>;

    // Current-user pointer, tracked independently of the User collection.
    fn current_user_id(&self) -> Result<Option<String>>;
    /// Resolves the pointer against the User collection; a dangling pointer
    /// yields None.
    fn current_user(&self) -> Result<Option<User>>;
    fn set_current_user(&self, user_id: &str) -> Result<()>;

    /// Produces a value unique within the process lifetime:
    /// millisecond timestamp plus a random suffix.
    fn generate_id(&self) -> String;

    fn export_snapshot(&self) -> Result<Snapshot>;
    fn export_json(&self) -> Result<String>;

    /// All-or-nothing restore from an exported document. On failure the
    /// store is exactly as it was before the attempt.
    fn import_json(&self, json: &str) -> Result<()>;

    /// Erases every key and re-initializes, returning the store to the fresh
    /// default state.
    fn clear_all(&self) -> Result<()>;

    fn stats(&self) -> Result<StoreStats>;
}
