//! Transaction CLI commands

use clap::Subcommand;

use super::{finish, resolve_category, resolve_id};
use crate::actions::Actions;
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::TransactionInput;
use crate::store::Store;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "250" or "249.99")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Transaction date (YYYY-MM-DD or RFC 3339, default: now)
        #[arg(short, long)]
        date: Option<String>,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only show transactions in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID or ID prefix
        id: String,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID or ID prefix
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        /// New category name or ID
        #[arg(short, long, conflicts_with = "clear_category")]
        category: Option<String>,
        /// Remove the category
        #[arg(long)]
        clear_category: bool,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID or ID prefix
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &Store,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let actions = Actions::with_settings(store, settings);

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            date,
            category,
        } => {
            let mut input = TransactionInput::new(amount, description);
            input.date = date;
            if let Some(category) = category {
                let categories = actions.get_categories();
                input.category_id = Some(resolve_category(&categories, &category)?.id.clone());
            }
            finish(actions.create_transaction(&input))?;
        }

        TransactionCommands::List { limit, category } => {
            let categories = actions.get_categories();
            let mut transactions = actions.get_transactions();

            if let Some(category) = category {
                let category = resolve_category(&categories, &category)?;
                transactions.retain(|t| t.category_id.as_deref() == Some(category.id.as_str()));
            }
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!(
                "{}",
                format_transaction_list(&transactions, &categories, settings)
            );
        }

        TransactionCommands::Show { id } => {
            let id = resolve_transaction_id(&actions, &id)?;
            let txn = actions
                .get_transaction_by_id(&id)
                .ok_or_else(|| TrackerError::transaction_not_found(&id))?;
            let category = txn
                .category_id
                .as_deref()
                .and_then(|category_id| actions.get_category_by_id(category_id));
            print!(
                "{}",
                format_transaction_details(&txn, category.as_ref(), settings)
            );
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            date,
            category,
            clear_category,
        } => {
            if amount.is_none()
                && description.is_none()
                && date.is_none()
                && category.is_none()
                && !clear_category
            {
                println!(
                    "No changes specified. Use --amount, --description, --date, \
                     --category, or --clear-category."
                );
                return Ok(());
            }

            let id = resolve_transaction_id(&actions, &id)?;
            let txn = actions
                .get_transaction_by_id(&id)
                .ok_or_else(|| TrackerError::transaction_not_found(&id))?;

            let mut input = TransactionInput::from(&txn);
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(description) = description {
                input.description = description;
            }
            if date.is_some() {
                input.date = date;
            }
            if clear_category {
                input.category_id = None;
            } else if let Some(category) = category {
                let categories = actions.get_categories();
                input.category_id = Some(resolve_category(&categories, &category)?.id.clone());
            }

            finish(actions.update_transaction(&id, &input))?;
        }

        TransactionCommands::Delete { id } => {
            let id = resolve_transaction_id(&actions, &id)?;
            finish(actions.delete_transaction(&id))?;
        }
    }

    Ok(())
}

fn resolve_transaction_id(actions: &Actions<'_>, raw: &str) -> TrackerResult<String> {
    let transactions = actions.get_transactions();
    resolve_id("Transaction", raw, transactions.iter().map(|t| t.id.as_str()))
}
