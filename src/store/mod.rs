//! Store accessor for the finance tracker
//!
//! The [`Store`] is the process's handle on the document files. It is built
//! once by the entry point and lent to repositories and reports, which reach
//! the three collections through it.

pub mod collection;
pub mod file_io;

pub use collection::{Collection, Document, UpdateOutcome};
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{BudgetRecord, CategoryRecord, TransactionRecord};

/// Handle to the document store and its collections
pub struct Store {
    paths: TrackerPaths,
    transactions: Collection<TransactionRecord>,
    categories: Collection<CategoryRecord>,
    budgets: Collection<BudgetRecord>,
}

impl Store {
    /// Open the store rooted at `paths`, creating its directories if needed
    pub fn open(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        tracing::debug!(data_dir = %paths.data_dir().display(), "Opened document store");

        Ok(Self {
            transactions: Collection::new("transactions", paths.transactions_file()),
            categories: Collection::new("categories", paths.categories_file()),
            budgets: Collection::new("budgets", paths.budgets_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn transactions(&self) -> &Collection<TransactionRecord> {
        &self.transactions
    }

    pub fn categories(&self) -> &Collection<CategoryRecord> {
        &self.categories
    }

    pub fn budgets(&self) -> &Collection<BudgetRecord> {
        &self.budgets
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::create_test_store;

    #[test]
    fn test_store_creation() {
        let (temp_dir, store) = create_test_store();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.transactions().count().unwrap(), 0);
        assert_eq!(store.categories().name(), "categories");
        assert_eq!(
            store.budgets().path(),
            &temp_dir.path().join("data").join("budgets.json")
        );
    }
}
