//! Transaction display formatting

use super::{fit, short_id, CategoryNames};
use crate::config::settings::Settings;
use crate::models::{Category, Transaction};

/// Format one transaction as a table row
fn format_transaction_row(
    txn: &Transaction,
    category_name: &str,
    settings: &Settings,
) -> String {
    format!(
        "{} {} {} {} {:>14}",
        short_id(&txn.id),
        fit(&txn.date.format(&settings.date_format).to_string(), 10),
        fit(&txn.description, 28),
        fit(category_name, 16),
        txn.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_list(
    transactions: &[Transaction],
    categories: &[Category],
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let names = CategoryNames::new(categories);
    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:28} {:16} {:>14}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(
            txn,
            names.resolve(txn.category_id.as_deref()),
            settings,
        ));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category: Option<&Category>,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Description: {}\n", txn.description));

    match (category, txn.category_id.as_deref()) {
        (Some(category), _) => {
            output.push_str(&format!("Category:    {}\n", category.name));
        }
        (None, Some(dangling)) => {
            output.push_str(&format!("Category:    (deleted: {})\n", dangling));
        }
        (None, None) => output.push_str("Category:    (uncategorized)\n"),
    }

    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
