use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::TransactionServiceTrait;
use crate::errors::Result;
use crate::store::StoreTrait;

/// Service for recording and maintaining transactions.
pub struct TransactionService {
    store: Arc<dyn StoreTrait>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn StoreTrait>) -> Self {
        TransactionService { store }
    }
}

impl TransactionServiceTrait for TransactionService {
    /// Validates the input, assigns an id and persists the new entry.
    fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        let transaction = new_transaction.into_transaction(self.store.generate_id());
        debug!(
            "adding {} transaction '{}' for user {}",
            transaction.kind.as_str(),
            transaction.id,
            transaction.user_id
        );
        self.store.add_transaction(transaction.clone())?;
        Ok(transaction)
    }

    fn update_transaction(&self, id: &str, update: TransactionUpdate) -> Result<()> {
        self.store.update_transaction(id, &update)
    }

    fn delete_transaction(&self, id: &str) -> Result<()> {
        self.store.delete_transaction(id)
    }

    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.store.get_transactions()
    }

    fn get_transactions_for_user(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let transactions = self.store.get_transactions()?;
        Ok(transactions
            .into_iter()
            .filter(|t| t.user_id == user_id)
            .collect())
    }
}
