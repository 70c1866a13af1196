//! Dashboard summary
//!
//! The headline figures shown above the dashboard charts.

use serde::Serialize;

use super::CategoryExpensesReport;
use crate::error::TrackerResult;
use crate::models::Money;
use crate::store::Store;

/// Headline dashboard figures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Sum of every transaction amount
    pub total_expenses: Money,
    /// Category with the largest spend, if any spending exists
    pub top_category: Option<String>,
    /// Spend of the top category, zero when there is none
    pub top_category_amount: Money,
    pub transaction_count: usize,
}

impl DashboardSummary {
    pub fn generate(store: &Store) -> TrackerResult<Self> {
        let expenses = CategoryExpensesReport::generate(store)?;
        let transaction_count = store.transactions().count()?;

        let (top_category, top_category_amount) = match expenses.top_category() {
            Some(top) => (Some(top.category.clone()), top.amount),
            None => (None, Money::zero()),
        };

        Ok(Self {
            total_expenses: expenses.total,
            top_category,
            top_category_amount,
            transaction_count,
        })
    }

    /// Top category name for display, "None" when there is no spending
    pub fn top_category_name(&self) -> &str {
        self.top_category.as_deref().unwrap_or("None")
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Expenses:    {}\n",
            self.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Top Category:      {} ({})\n",
            self.top_category_name(),
            self.top_category_amount.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Transactions:      {}\n", self.transaction_count));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryInput, TransactionInput};
    use crate::repositories::{CategoryRepository, TransactionRepository};
    use crate::store::test_support::create_test_store;

    #[test]
    fn test_empty_summary() {
        let (_temp_dir, store) = create_test_store();
        let summary = DashboardSummary::generate(&store).unwrap();

        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.top_category, None);
        assert_eq!(summary.top_category_name(), "None");
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn test_summary_figures() {
        let (_temp_dir, store) = create_test_store();
        let groceries = CategoryRepository::new(&store)
            .create(&CategoryInput::new("Groceries", "#0a0", "cart"))
            .unwrap();
        let transactions = TransactionRepository::new(&store);
        transactions
            .create(&TransactionInput::new("30", "Veg").in_category(&groceries.id))
            .unwrap();
        transactions
            .create(&TransactionInput::new("45", "Fruit").in_category(&groceries.id))
            .unwrap();
        transactions.create(&TransactionInput::new("50", "Gift")).unwrap();

        let summary = DashboardSummary::generate(&store).unwrap();
        assert_eq!(summary.total_expenses, Money::from_units(125));
        assert_eq!(summary.top_category.as_deref(), Some("Groceries"));
        assert_eq!(summary.top_category_amount, Money::from_units(75));
        assert_eq!(summary.transaction_count, 3);
        assert!(summary.format_terminal("$").contains("Groceries ($75.00)"));
    }
}
