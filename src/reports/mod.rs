//! Reports module for the finance tracker
//!
//! Read-only aggregations over the current store snapshot: spending per
//! calendar month, spending per category, monthly budgets against actual
//! spend, and the dashboard summary.

pub mod budget_comparison;
pub mod category_expenses;
pub mod monthly;
pub mod summary;

pub use budget_comparison::{BudgetComparison, BudgetComparisonReport};
pub use category_expenses::{CategoryExpense, CategoryExpensesReport};
pub use monthly::{MonthlyExpense, MonthlyExpensesReport};
pub use summary::DashboardSummary;
