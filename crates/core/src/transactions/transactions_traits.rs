use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};

/// Trait for transaction service operations.
pub trait TransactionServiceTrait: Send + Sync {
    fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    fn update_transaction(&self, id: &str, update: TransactionUpdate) -> Result<()>;
    fn delete_transaction(&self, id: &str) -> Result<()>;
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    fn get_transactions_for_user(&self, user_id: &str) -> Result<Vec<Transaction>>;
}
