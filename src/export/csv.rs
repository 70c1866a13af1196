//! CSV export functionality
//!
//! Amounts are written as decimal units ("12.50"), not cents.

use serde::Serialize;
use std::io::Write;

use super::DashboardExport;
use crate::display::CategoryNames;
use crate::error::{TrackerError, TrackerResult};
use crate::repositories::{CategoryRepository, TransactionRepository};
use crate::store::Store;

/// One line of the dashboard CSV; columns that do not apply stay empty
#[derive(Serialize)]
struct DashboardRow<'a> {
    section: &'static str,
    label: String,
    amount: String,
    budgeted: String,
    color: &'a str,
}

impl<'a> DashboardRow<'a> {
    fn new(section: &'static str, label: impl Into<String>, amount: impl ToString) -> Self {
        Self {
            section,
            label: label.into(),
            amount: amount.to_string(),
            budgeted: String::new(),
            color: "",
        }
    }
}

#[derive(Serialize)]
struct TransactionRow<'a> {
    id: &'a str,
    date: String,
    description: &'a str,
    category: &'a str,
    amount: String,
}

fn csv_error(e: ::csv::Error) -> TrackerError {
    TrackerError::Export(format!("Failed to write CSV: {}", e))
}

/// Export the dashboard snapshot as a single CSV table
///
/// The `section` column tells the row kinds apart: `summary`, `monthly`,
/// `category`, `budget` and `recent`.
pub fn export_dashboard_csv<W: Write + ?Sized>(
    export: &DashboardExport,
    writer: &mut W,
) -> TrackerResult<()> {
    let summary = &export.summary;
    let mut rows = vec![
        DashboardRow::new("summary", "Total Expenses", summary.total_expenses),
        DashboardRow::new(
            "summary",
            format!("Top Category: {}", summary.top_category_name()),
            summary.top_category_amount,
        ),
        DashboardRow::new("summary", "Transaction Count", summary.transaction_count),
    ];

    rows.extend(export.monthly_expenses.iter().map(|m| {
        DashboardRow::new("monthly", format!("{} {}", m.month, m.year), m.amount)
    }));

    rows.extend(export.category_expenses.iter().map(|c| DashboardRow {
        color: &c.color,
        ..DashboardRow::new("category", c.category.clone(), c.amount)
    }));

    rows.extend(export.budget_comparison.iter().map(|b| DashboardRow {
        budgeted: b.budgeted.to_string(),
        color: &b.color,
        ..DashboardRow::new("budget", b.category.clone(), b.actual)
    }));

    rows.extend(
        export
            .recent_transactions
            .iter()
            .map(|t| DashboardRow::new("recent", t.description.clone(), t.amount)),
    );

    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for row in &rows {
        csv_writer.serialize(row).map_err(csv_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))
}

/// Export all transactions, newest first, with category names resolved
pub fn export_transactions_csv<W: Write + ?Sized>(
    store: &Store,
    writer: &mut W,
) -> TrackerResult<()> {
    let categories = CategoryRepository::new(store).list()?;
    let names = CategoryNames::new(&categories);
    let transactions = TransactionRepository::new(store).list()?;

    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for txn in &transactions {
        csv_writer
            .serialize(TransactionRow {
                id: &txn.id,
                date: txn.date.to_rfc3339(),
                description: &txn.description,
                category: names.resolve(txn.category_id.as_deref()),
                amount: txn.amount.to_string(),
            })
            .map_err(csv_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    tracing::debug!(count = transactions.len(), "Exported transactions to CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{CategoryInput, TransactionInput};
    use crate::store::test_support::create_test_store;

    fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
        ::csv::Reader::from_reader(bytes)
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_dashboard_csv_sections() {
        let (_temp_dir, store) = create_test_store();
        let travel = CategoryRepository::new(&store)
            .create(&CategoryInput::new("Travel, Local", "#0af", "bus"))
            .unwrap();
        TransactionRepository::new(&store)
            .create(
                &TransactionInput::new("42", "Metro card")
                    .on("2024-03-04")
                    .in_category(&travel.id),
            )
            .unwrap();

        let export = DashboardExport::from_store(&store, &Settings::default()).unwrap();
        let mut output = Vec::new();
        export_dashboard_csv(&export, &mut output).unwrap();

        let text = String::from_utf8(output.clone()).unwrap();
        assert!(text.starts_with("section,label,amount,budgeted,color\n"));

        let rows = read_rows(&output);
        assert_eq!(rows[0], vec!["summary", "Total Expenses", "42.00", "", ""]);
        assert_eq!(rows[1][1], "Top Category: Travel, Local");
        assert_eq!(rows[2][2], "1");
        assert!(rows
            .iter()
            .any(|r| r == &vec!["monthly", "Mar 2024", "42.00", "", ""]));
        assert!(rows
            .iter()
            .any(|r| r == &vec!["category", "Travel, Local", "42.00", "", "#0af"]));
        assert!(rows.iter().any(|r| r[0] == "recent" && r[1] == "Metro card"));
    }

    #[test]
    fn test_transactions_csv() {
        let (_temp_dir, store) = create_test_store();
        let transactions = TransactionRepository::new(&store);
        transactions
            .create(&TransactionInput::new("7.5", "Tea").on("2024-01-02"))
            .unwrap();
        transactions
            .create(&TransactionInput::new("100", "Shoes").on("2024-01-09"))
            .unwrap();

        let mut output = Vec::new();
        export_transactions_csv(&store, &mut output).unwrap();

        let text = String::from_utf8(output.clone()).unwrap();
        assert!(text.starts_with("id,date,description,category,amount\n"));

        let rows = read_rows(&output);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][2], "Shoes");
        assert_eq!(rows[0][3], "Uncategorized");
        assert_eq!(rows[1][4], "7.50");
        assert_eq!(rows[1][1], "2024-01-02T00:00:00+00:00");
    }
}
