//! Monthly Expenses report
//!
//! Sums every transaction by the UTC calendar month it falls in. Months
//! without transactions do not appear.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::TrackerResult;
use crate::models::{CalendarMonth, Money};
use crate::store::Store;

/// Spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyExpense {
    pub year: i32,
    /// Three-letter month label, "Jan" to "Dec"
    pub month: String,
    pub amount: Money,
}

/// Monthly Expenses report, oldest month first
#[derive(Debug, Clone)]
pub struct MonthlyExpensesReport {
    pub months: Vec<MonthlyExpense>,
    pub total: Money,
}

impl MonthlyExpensesReport {
    pub fn generate(store: &Store) -> TrackerResult<Self> {
        let mut by_month: BTreeMap<CalendarMonth, Money> = BTreeMap::new();
        for doc in store.transactions().find_all()? {
            *by_month
                .entry(CalendarMonth::of_timestamp(&doc.body.date))
                .or_default() += doc.body.amount;
        }

        let months: Vec<_> = by_month
            .into_iter()
            .map(|(month, amount)| MonthlyExpense {
                year: month.year,
                month: month.label().to_string(),
                amount,
            })
            .collect();
        let total: Money = months.iter().map(|m| m.amount).sum();

        tracing::debug!(months = months.len(), "Generated monthly expenses");
        Ok(Self { months, total })
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Expenses\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!("{:<12} {:>20}\n", "Month", "Amount"));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for month in &self.months {
            output.push_str(&format!(
                "{:<12} {:>20}\n",
                format!("{} {}", month.month, month.year),
                month.amount.format_with_symbol(currency_symbol)
            ));
        }
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>20}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }
}
