//! Budget Comparison report
//!
//! Compares each monthly budget with what was actually spent in its
//! category during the current calendar month. Budgets for other periods
//! are not computed, and budgets whose category no longer exists are left
//! out.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::error::TrackerResult;
use crate::models::{BudgetPeriod, CalendarMonth, Money, ObjectId};
use crate::store::Store;

/// One monthly budget against its actual spend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    pub budgeted: Money,
    pub actual: Money,
    pub color: String,
}

impl BudgetComparison {
    /// Budgeted minus actual; negative when overspent
    pub fn remaining(&self) -> Money {
        self.budgeted - self.actual
    }

    pub fn is_over_budget(&self) -> bool {
        self.actual > self.budgeted
    }
}

/// Budget Comparison report for one calendar month
#[derive(Debug, Clone)]
pub struct BudgetComparisonReport {
    pub month: CalendarMonth,
    pub rows: Vec<BudgetComparison>,
}

impl BudgetComparisonReport {
    /// Compare against the current UTC month
    pub fn generate(store: &Store) -> TrackerResult<Self> {
        Self::generate_for(store, Utc::now().date_naive())
    }

    /// Compare against the calendar month containing `today`
    pub fn generate_for(store: &Store, today: NaiveDate) -> TrackerResult<Self> {
        let month = CalendarMonth::of_date(today);

        let mut actual_by_category: HashMap<ObjectId, Money> = HashMap::new();
        for doc in store.transactions().find_all()? {
            let txn = doc.body;
            let Some(category_id) = txn.category_id else {
                continue;
            };
            if month.contains(txn.date.date_naive()) {
                *actual_by_category.entry(category_id).or_default() += txn.amount;
            }
        }

        let categories: HashMap<_, _> = store
            .categories()
            .find_all()?
            .into_iter()
            .map(|doc| (doc.id, doc.body))
            .collect();

        let rows: Vec<_> = store
            .budgets()
            .find_all()?
            .into_iter()
            .filter(|doc| doc.body.period == BudgetPeriod::Monthly)
            .filter_map(|doc| {
                let budget = doc.body;
                let category = categories.get(&budget.category_id)?;
                Some(BudgetComparison {
                    category: category.name.clone(),
                    budgeted: budget.amount,
                    actual: actual_by_category
                        .get(&budget.category_id)
                        .copied()
                        .unwrap_or_default(),
                    color: category.color.clone(),
                })
            })
            .collect();

        tracing::debug!(%month, rows = rows.len(), "Generated budget comparison");
        Ok(Self { month, rows })
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget vs Actual: {}\n", self.month));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No monthly budgets set.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>16} {:>16} {:>16}\n",
            "Category", "Budgeted", "Actual", "Remaining"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.is_over_budget() { " !" } else { "" };
            output.push_str(&format!(
                "{:<28} {:>16} {:>16} {:>16}{}\n",
                row.category,
                row.budgeted.format_with_symbol(currency_symbol),
                row.actual.format_with_symbol(currency_symbol),
                row.remaining().format_with_symbol(currency_symbol),
                marker
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, CategoryInput, TransactionInput};
    use crate::repositories::{BudgetRepository, CategoryRepository, TransactionRepository};
    use crate::store::test_support::create_test_store;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_budget_against_current_month_spend() {
        let (_temp_dir, store) = create_test_store();
        let category = CategoryRepository::new(&store)
            .create(&CategoryInput::new("A", "#abcdef", "a"))
            .unwrap();
        BudgetRepository::new(&store)
            .create(&BudgetInput::monthly(&category.id, "200"))
            .unwrap();

        let transactions = TransactionRepository::new(&store);
        for (amount, day) in [("100", "2024-05-01"), ("50", "2024-05-31"), ("999", "2024-04-30")] {
            transactions
                .create(&TransactionInput::new(amount, "spend").on(day).in_category(&category.id))
                .unwrap();
        }

        let report = BudgetComparisonReport::generate_for(&store, date("2024-05-15")).unwrap();
        assert_eq!(
            report.rows,
            vec![BudgetComparison {
                category: "A".into(),
                budgeted: Money::from_units(200),
                actual: Money::from_units(150),
                color: "#abcdef".into(),
            }]
        );
        assert_eq!(report.rows[0].remaining(), Money::from_units(50));
    }

    #[test]
    fn test_no_spend_is_zero_actual() {
        let (_temp_dir, store) = create_test_store();
        let category = CategoryRepository::new(&store)
            .create(&CategoryInput::new("Fun", "#111", "star"))
            .unwrap();
        BudgetRepository::new(&store)
            .create(&BudgetInput::monthly(&category.id, "75"))
            .unwrap();

        let report = BudgetComparisonReport::generate_for(&store, date("2024-02-29")).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].actual, Money::zero());
    }

    #[test]
    fn test_excludes_non_monthly_budgets() {
        let (_temp_dir, store) = create_test_store();
        let category = CategoryRepository::new(&store)
            .create(&CategoryInput::new("Car", "#222", "car"))
            .unwrap();
        let budgets = BudgetRepository::new(&store);
        budgets
            .create(&BudgetInput::new(&category.id, "1200", "yearly"))
            .unwrap();
        budgets
            .create(&BudgetInput::new(&category.id, "50", "weekly"))
            .unwrap();

        let report = BudgetComparisonReport::generate_for(&store, date("2024-07-01")).unwrap();
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_drops_budgets_with_missing_category() {
        let (_temp_dir, store) = create_test_store();
        let categories = CategoryRepository::new(&store);
        let kept = categories
            .create(&CategoryInput::new("Kept", "#333", "k"))
            .unwrap();
        let gone = categories
            .create(&CategoryInput::new("Gone", "#444", "g"))
            .unwrap();

        let budgets = BudgetRepository::new(&store);
        budgets.create(&BudgetInput::monthly(&kept.id, "10")).unwrap();
        budgets.create(&BudgetInput::monthly(&gone.id, "20")).unwrap();
        budgets
            .create(&BudgetInput::monthly(ObjectId::new().to_string(), "30"))
            .unwrap();
        categories.delete(&gone.id).unwrap();

        let report = BudgetComparisonReport::generate_for(&store, date("2024-01-10")).unwrap();
        let names: Vec<_> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Kept"]);
    }

    #[test]
    fn test_uncategorized_spend_is_not_attributed() {
        let (_temp_dir, store) = create_test_store();
        let category = CategoryRepository::new(&store)
            .create(&CategoryInput::new("Food", "#555", "f"))
            .unwrap();
        BudgetRepository::new(&store)
            .create(&BudgetInput::monthly(&category.id, "100"))
            .unwrap();
        TransactionRepository::new(&store)
            .create(&TransactionInput::new("40", "Unfiled").on("2024-03-03"))
            .unwrap();

        let report = BudgetComparisonReport::generate_for(&store, date("2024-03-20")).unwrap();
        assert_eq!(report.rows[0].actual, Money::zero());
        assert!(!report.rows[0].is_over_budget());
    }
}
