//! Snapshot of everything the dashboard shows

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::Transaction;
use crate::reports::{
    BudgetComparison, BudgetComparisonReport, CategoryExpense, CategoryExpensesReport,
    DashboardSummary, MonthlyExpense, MonthlyExpensesReport,
};
use crate::repositories::TransactionRepository;
use crate::store::Store;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// All dashboard data in one structure
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub summary: DashboardSummary,
    pub monthly_expenses: Vec<MonthlyExpense>,
    pub category_expenses: Vec<CategoryExpense>,
    pub budget_comparison: Vec<BudgetComparison>,
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardExport {
    pub fn from_store(store: &Store, settings: &Settings) -> TrackerResult<Self> {
        Self::from_store_as_of(store, settings, Utc::now().date_naive())
    }

    /// Build the export with the budget comparison taken for the month
    /// containing `today`
    pub fn from_store_as_of(
        store: &Store,
        settings: &Settings,
        today: NaiveDate,
    ) -> TrackerResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: DashboardSummary::generate(store)?,
            monthly_expenses: MonthlyExpensesReport::generate(store)?.months,
            category_expenses: CategoryExpensesReport::generate(store)?.categories,
            budget_comparison: BudgetComparisonReport::generate_for(store, today)?.rows,
            recent_transactions: TransactionRepository::new(store)
                .recent(settings.recent_transaction_count)?,
        })
    }
}
