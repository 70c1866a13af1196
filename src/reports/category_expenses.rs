//! Category Expenses report
//!
//! Left-joins every transaction to its category and sums per category.
//! Transactions with no category, or whose category has been deleted, land
//! in a single synthetic "Uncategorized" bucket.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::TrackerResult;
use crate::models::{CategoryRecord, Money, ObjectId, UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME};
use crate::store::Store;

/// Spending attributed to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: Money,
    pub color: String,
}

/// Category Expenses report
///
/// Rows appear in the order their category is first seen among the stored
/// transactions, so the output is stable while the data is unchanged.
#[derive(Debug, Clone)]
pub struct CategoryExpensesReport {
    pub categories: Vec<CategoryExpense>,
    pub total: Money,
}

impl CategoryExpensesReport {
    pub fn generate(store: &Store) -> TrackerResult<Self> {
        let categories: HashMap<ObjectId, CategoryRecord> = store
            .categories()
            .find_all()?
            .into_iter()
            .map(|doc| (doc.id, doc.body))
            .collect();

        // None keys the Uncategorized bucket
        let mut index: HashMap<Option<ObjectId>, usize> = HashMap::new();
        let mut rows: Vec<CategoryExpense> = Vec::new();

        for doc in store.transactions().find_all()? {
            let txn = doc.body;
            let resolved = txn
                .category_id
                .and_then(|id| categories.get(&id).map(|category| (id, category)));
            let key = resolved.map(|(id, _)| id);

            let slot = *index.entry(key).or_insert_with(|| {
                let (name, color) = match resolved {
                    Some((_, category)) => (category.name.clone(), category.color.clone()),
                    None => (UNCATEGORIZED_NAME.to_string(), UNCATEGORIZED_COLOR.to_string()),
                };
                rows.push(CategoryExpense {
                    category: name,
                    amount: Money::zero(),
                    color,
                });
                rows.len() - 1
            });
            rows[slot].amount += txn.amount;
        }

        let total: Money = rows.iter().map(|r| r.amount).sum();

        tracing::debug!(categories = rows.len(), "Generated category expenses");
        Ok(Self {
            categories: rows,
            total,
        })
    }

    /// The category with the most spending; ties go to the first seen
    pub fn top_category(&self) -> Option<&CategoryExpense> {
        self.categories
            .iter()
            .fold(None, |best: Option<&CategoryExpense>, row| match best {
                Some(b) if b.amount >= row.amount => Some(b),
                _ => Some(row),
            })
    }

    /// Share of total spending for a row, as a percentage
    pub fn percentage(&self, row: &CategoryExpense) -> f64 {
        if self.total.is_zero() {
            0.0
        } else {
            (row.amount.cents() as f64 / self.total.cents() as f64) * 100.0
        }
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Category Expenses\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>18} {:>8}\n",
            "Category", "Amount", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let mut sorted: Vec<_> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
        for row in sorted {
            output.push_str(&format!(
                "{:<30} {:>18} {:>7.1}%\n",
                row.category,
                row.amount.format_with_symbol(currency_symbol),
                self.percentage(row)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>18}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }
}
