//! Actions for the presentation layer
//!
//! Mutations report a [`ActionResponse`] instead of an error, and reads never
//! fail: a store failure degrades to an empty result and is logged. Messages
//! for validation, not-found and duplicate errors are passed through as-is;
//! store failures become a generic "Failed to ..." message.

use serde::Serialize;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Budget, BudgetInput, Category, CategoryInput, Transaction, TransactionInput,
};
use crate::reports::{
    BudgetComparison, BudgetComparisonReport, CategoryExpense, CategoryExpensesReport,
    DashboardSummary, MonthlyExpense, MonthlyExpensesReport,
};
use crate::repositories::{BudgetRepository, CategoryRepository, TransactionRepository};
use crate::store::Store;

/// Outcome of a mutation as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Turn a mutation result into a response
fn respond<T>(result: TrackerResult<T>, done: &str, failed: &str) -> ActionResponse {
    match result {
        Ok(_) => ActionResponse::ok(done),
        Err(
            e @ (TrackerError::Validation(_)
            | TrackerError::NotFound { .. }
            | TrackerError::Duplicate { .. }),
        ) => ActionResponse::failed(e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "{}", failed);
            ActionResponse::failed(failed)
        }
    }
}

/// Unwrap a read, logging and substituting a default on failure
fn or_empty<T: Default>(result: TrackerResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to fetch {}", what);
        T::default()
    })
}

/// Entry points the presentation layer calls
pub struct Actions<'a> {
    store: &'a Store,
    recent_limit: usize,
}

impl<'a> Actions<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self::with_settings(store, &Settings::default())
    }

    pub fn with_settings(store: &'a Store, settings: &Settings) -> Self {
        Self {
            store,
            recent_limit: settings.recent_transaction_count,
        }
    }

    // Transactions

    pub fn create_transaction(&self, input: &TransactionInput) -> ActionResponse {
        respond(
            TransactionRepository::new(self.store).create(input),
            "Transaction created successfully",
            "Failed to create transaction",
        )
    }

    pub fn get_transactions(&self) -> Vec<Transaction> {
        or_empty(TransactionRepository::new(self.store).list(), "transactions")
    }

    pub fn get_transaction_by_id(&self, id: &str) -> Option<Transaction> {
        or_empty(
            TransactionRepository::new(self.store).get_by_id(id),
            "transaction",
        )
    }

    pub fn update_transaction(&self, id: &str, input: &TransactionInput) -> ActionResponse {
        respond(
            TransactionRepository::new(self.store).update(id, input),
            "Transaction updated successfully",
            "Failed to update transaction",
        )
    }

    pub fn delete_transaction(&self, id: &str) -> ActionResponse {
        respond(
            TransactionRepository::new(self.store).delete(id),
            "Transaction deleted successfully",
            "Failed to delete transaction",
        )
    }

    // Categories

    pub fn create_category(&self, input: &CategoryInput) -> ActionResponse {
        respond(
            CategoryRepository::new(self.store).create(input),
            "Category created successfully",
            "Failed to create category",
        )
    }

    pub fn get_categories(&self) -> Vec<Category> {
        or_empty(CategoryRepository::new(self.store).list(), "categories")
    }

    pub fn get_category_by_id(&self, id: &str) -> Option<Category> {
        or_empty(CategoryRepository::new(self.store).get_by_id(id), "category")
    }

    pub fn update_category(&self, id: &str, input: &CategoryInput) -> ActionResponse {
        respond(
            CategoryRepository::new(self.store).update(id, input),
            "Category updated successfully",
            "Failed to update category",
        )
    }

    pub fn delete_category(&self, id: &str) -> ActionResponse {
        respond(
            CategoryRepository::new(self.store).delete(id),
            "Category deleted successfully",
            "Failed to delete category",
        )
    }

    // Budgets

    /// Create a budget, or overwrite the amount of the existing one for the
    /// same category and period
    pub fn create_budget(&self, input: &BudgetInput) -> ActionResponse {
        respond(
            BudgetRepository::new(self.store).create(input),
            "Budget saved successfully",
            "Failed to save budget",
        )
    }

    pub fn get_budgets(&self) -> Vec<Budget> {
        or_empty(BudgetRepository::new(self.store).list(), "budgets")
    }

    pub fn get_budget_by_id(&self, id: &str) -> Option<Budget> {
        or_empty(BudgetRepository::new(self.store).get_by_id(id), "budget")
    }

    pub fn update_budget(&self, id: &str, input: &BudgetInput) -> ActionResponse {
        respond(
            BudgetRepository::new(self.store).update(id, input),
            "Budget updated successfully",
            "Failed to update budget",
        )
    }

    pub fn delete_budget(&self, id: &str) -> ActionResponse {
        respond(
            BudgetRepository::new(self.store).delete(id),
            "Budget deleted successfully",
            "Failed to delete budget",
        )
    }

    // Reports

    pub fn get_monthly_expenses(&self) -> Vec<MonthlyExpense> {
        or_empty(
            MonthlyExpensesReport::generate(self.store).map(|r| r.months),
            "monthly expenses",
        )
    }

    pub fn get_category_expenses(&self) -> Vec<CategoryExpense> {
        or_empty(
            CategoryExpensesReport::generate(self.store).map(|r| r.categories),
            "category expenses",
        )
    }

    pub fn get_budget_comparison(&self) -> Vec<BudgetComparison> {
        or_empty(
            BudgetComparisonReport::generate(self.store).map(|r| r.rows),
            "budget comparison",
        )
    }

    pub fn get_dashboard_summary(&self) -> DashboardSummary {
        or_empty(DashboardSummary::generate(self.store), "dashboard summary")
    }

    /// The newest transactions, as many as the settings ask for
    pub fn get_recent_transactions(&self) -> Vec<Transaction> {
        or_empty(
            TransactionRepository::new(self.store).recent(self.recent_limit),
            "recent transactions",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Money, ObjectId};
    use crate::store::test_support::create_test_store;
    use std::fs;

    #[test]
    fn test_create_transaction_messages() {
        let (_temp_dir, store) = create_test_store();
        let actions = Actions::new(&store);

        let ok = actions.create_transaction(&TransactionInput::new("25", "Books"));
        assert_eq!(ok, ActionResponse::ok("Transaction created successfully"));

        let rejected = actions.create_transaction(&TransactionInput::new("0", "Nothing"));
        assert_eq!(
            rejected,
            ActionResponse::failed("Amount must be greater than 0")
        );

        let transactions = actions.get_transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Books");
        assert_eq!(transactions[0].amount, Money::from_units(25));
    }

    #[test]
    fn test_budget_saved_twice_keeps_one() {
        let (_temp_dir, store) = create_test_store();
        let actions = Actions::new(&store);
        let category = ObjectId::new().to_string();

        let first = actions.create_budget(&BudgetInput::monthly(&category, "100"));
        let second = actions.create_budget(&BudgetInput::monthly(&category, "250"));
        assert_eq!(first.message, "Budget saved successfully");
        assert!(second.success);

        let budgets = actions.get_budgets();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, Money::from_units(250));
    }

    #[test]
    fn test_not_found_message() {
        let (_temp_dir, store) = create_test_store();
        let actions = Actions::new(&store);
        let missing = ObjectId::new().to_string();

        let response = actions.delete_category(&missing);
        assert!(!response.success);
        assert_eq!(response.message, format!("Category not found: {}", missing));
        assert!(actions.get_category_by_id(&missing).is_none());
    }

    #[test]
    fn test_store_failures_degrade() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::open(paths.clone()).unwrap();
        fs::write(paths.transactions_file(), "{ not json").unwrap();

        let actions = Actions::new(&store);
        assert!(actions.get_transactions().is_empty());
        assert!(actions.get_monthly_expenses().is_empty());
        assert_eq!(actions.get_dashboard_summary(), DashboardSummary::default());

        let response = actions.create_transaction(&TransactionInput::new("5", "Coffee"));
        assert_eq!(response, ActionResponse::failed("Failed to create transaction"));
    }

    #[test]
    fn test_recent_transactions_respects_settings() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings {
            recent_transaction_count: 2,
            ..Settings::default()
        };
        let actions = Actions::with_settings(&store, &settings);

        for day in ["2024-01-01", "2024-01-03", "2024-01-02"] {
            actions.create_transaction(&TransactionInput::new("1", day).on(day));
        }

        let recent: Vec<_> = actions
            .get_recent_transactions()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(recent, vec!["2024-01-03", "2024-01-02"]);
    }

    #[test]
    fn test_dashboard_reads() {
        let (_temp_dir, store) = create_test_store();
        let actions = Actions::new(&store);
        actions.create_category(&CategoryInput::new("Food", "#f00", "f"));
        let food = actions.get_categories().remove(0);

        actions.create_transaction(
            &TransactionInput::new("100", "A").on("2024-01-05").in_category(&food.id),
        );
        actions.create_transaction(&TransactionInput::new("50", "B").on("2024-02-10"));

        let monthly = actions.get_monthly_expenses();
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month, "Jan");

        let by_category = actions.get_category_expenses();
        let total: Money = by_category.iter().map(|c| c.amount).sum();
        assert_eq!(total, Money::from_units(150));

        let summary = actions.get_dashboard_summary();
        assert_eq!(summary.top_category.as_deref(), Some("Food"));
        assert_eq!(summary.transaction_count, 2);
    }
}
