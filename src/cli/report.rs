//! Report CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::actions::Actions;
use crate::config::settings::Settings;
use crate::display::format_transaction_list;
use crate::error::{TrackerError, TrackerResult};
use crate::reports::{
    BudgetComparisonReport, CategoryExpensesReport, DashboardSummary, MonthlyExpensesReport,
};
use crate::store::Store;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending per calendar month
    Monthly,

    /// Spending per category
    Categories,

    /// Monthly budgets against this month's spending
    Budgets {
        /// Compare against the month containing this date (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Dashboard summary with the most recent transactions
    Summary,
}

/// Handle a report command
pub fn handle_report_command(
    store: &Store,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Monthly => {
            let report = MonthlyExpensesReport::generate(store)?;
            print!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Categories => {
            let report = CategoryExpensesReport::generate(store)?;
            print!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Budgets { as_of } => {
            let report = match as_of {
                Some(raw) => {
                    let today = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                        TrackerError::Validation(format!(
                            "Invalid date: {}. Use YYYY-MM-DD format.",
                            raw
                        ))
                    })?;
                    BudgetComparisonReport::generate_for(store, today)?
                }
                None => BudgetComparisonReport::generate(store)?,
            };
            print!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Summary => {
            let summary = DashboardSummary::generate(store)?;
            print!("{}", summary.format_terminal(symbol));

            let actions = Actions::with_settings(store, settings);
            println!();
            println!("Recent Transactions");
            print!(
                "{}",
                format_transaction_list(
                    &actions.get_recent_transactions(),
                    &actions.get_categories(),
                    settings
                )
            );
        }
    }

    Ok(())
}
