//! Budget CLI commands

use clap::Subcommand;

use super::{finish, resolve_category, resolve_id};
use crate::actions::Actions;
use crate::config::settings::Settings;
use crate::display::{format_budget_details, format_budget_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetInput, BudgetPeriod};
use crate::store::Store;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a category (replaces the amount if one exists)
    Set {
        /// Category name or ID
        category: String,
        /// Budget amount
        amount: String,
        /// Budget period
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },

    /// List budgets
    List {
        /// Only show budgets for this period
        #[arg(short, long)]
        period: Option<BudgetPeriod>,
    },

    /// Show budget details
    Show {
        /// Budget ID or ID prefix
        id: String,
    },

    /// Edit a budget
    Edit {
        /// Budget ID or ID prefix
        id: String,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID or ID prefix
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let actions = Actions::with_settings(store, settings);

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            period,
        } => {
            let categories = actions.get_categories();
            let category = resolve_category(&categories, &category)?;
            finish(actions.create_budget(&BudgetInput::new(&category.id, amount, period)))?;
        }

        BudgetCommands::List { period } => {
            let mut budgets = actions.get_budgets();
            if let Some(period) = period {
                budgets.retain(|b| b.period == period);
            }
            print!(
                "{}",
                format_budget_list(&budgets, &actions.get_categories(), settings)
            );
        }

        BudgetCommands::Show { id } => {
            let id = resolve_budget_id(&actions, &id)?;
            let budget = actions
                .get_budget_by_id(&id)
                .ok_or_else(|| TrackerError::budget_not_found(&id))?;
            let category = actions.get_category_by_id(&budget.category_id);
            print!(
                "{}",
                format_budget_details(&budget, category.as_ref(), settings)
            );
        }

        BudgetCommands::Edit {
            id,
            category,
            amount,
            period,
        } => {
            if category.is_none() && amount.is_none() && period.is_none() {
                println!("No changes specified. Use --category, --amount, or --period.");
                return Ok(());
            }

            let id = resolve_budget_id(&actions, &id)?;
            let budget = actions
                .get_budget_by_id(&id)
                .ok_or_else(|| TrackerError::budget_not_found(&id))?;

            let mut input = BudgetInput::from(&budget);
            if let Some(category) = category {
                let categories = actions.get_categories();
                input.category_id = resolve_category(&categories, &category)?.id.clone();
            }
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(period) = period {
                input.period = period;
            }

            finish(actions.update_budget(&id, &input))?;
        }

        BudgetCommands::Delete { id } => {
            let id = resolve_budget_id(&actions, &id)?;
            finish(actions.delete_budget(&id))?;
        }
    }

    Ok(())
}

fn resolve_budget_id(actions: &Actions<'_>, raw: &str) -> TrackerResult<String> {
    let budgets = actions.get_budgets();
    resolve_id("Budget", raw, budgets.iter().map(|b| b.id.as_str()))
}
