//! Transaction repository
//!
//! CRUD for transactions. Listing is newest first, matching how the
//! dashboard and the transactions table present them.

use chrono::Utc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionInput};
use crate::store::Store;

use super::{parse_lookup_id, parse_target_id};

/// Repository for transactions
pub struct TransactionRepository<'a> {
    store: &'a Store,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Validate and insert a new transaction
    pub fn create(&self, input: &TransactionInput) -> TrackerResult<Transaction> {
        let now = Utc::now();
        let fields = input.validate(now).map_err(|e| {
            tracing::debug!(error = %e, "Rejected transaction input");
            TrackerError::Validation(e.to_string())
        })?;

        let record = fields.into_record(now);
        let id = self.store.transactions().insert(record.clone())?;

        tracing::info!(%id, amount = %record.amount, "Created transaction");
        Ok(Transaction::from_record(id, &record))
    }

    /// All transactions, newest first
    pub fn list(&self) -> TrackerResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .store
            .transactions()
            .find_all()?
            .iter()
            .map(|doc| Transaction::from_record(doc.id, &doc.body))
            .collect();

        transactions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(transactions)
    }

    /// The `limit` newest transactions
    pub fn recent(&self, limit: usize) -> TrackerResult<Vec<Transaction>> {
        let mut transactions = self.list()?;
        transactions.truncate(limit);
        Ok(transactions)
    }

    pub fn get_by_id(&self, id: &str) -> TrackerResult<Option<Transaction>> {
        let Some(id) = parse_lookup_id(id) else {
            return Ok(None);
        };

        Ok(self
            .store
            .transactions()
            .find_by_id(id)?
            .map(|doc| Transaction::from_record(doc.id, &doc.body)))
    }

    /// Replace the editable fields of an existing transaction
    pub fn update(&self, id: &str, input: &TransactionInput) -> TrackerResult<Transaction> {
        let object_id = parse_target_id("Transaction", id)?;
        let now = Utc::now();
        let fields = input
            .validate(now)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let matched = self
            .store
            .transactions()
            .update(object_id, |record| fields.apply_to(record, now))?;
        if !matched {
            return Err(TrackerError::transaction_not_found(id));
        }

        tracing::info!(id = %object_id, "Updated transaction");
        self.get_by_id(id)?
            .ok_or_else(|| TrackerError::transaction_not_found(id))
    }

    pub fn delete(&self, id: &str) -> TrackerResult<()> {
        let object_id = parse_target_id("Transaction", id)?;

        if !self.store.transactions().delete(object_id)? {
            return Err(TrackerError::transaction_not_found(id));
        }

        tracing::info!(id = %object_id, "Deleted transaction");
        Ok(())
    }

    pub fn count(&self) -> TrackerResult<usize> {
        self.store.transactions().count()
    }
}
