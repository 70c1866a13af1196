//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the actions and reports.

pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::actions::ActionResponse;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Category;

/// Print a successful action's message, or turn a failed one into an error
/// so the process exits non-zero
fn finish(response: ActionResponse) -> TrackerResult<()> {
    if response.success {
        println!("{}", response.message);
        Ok(())
    } else {
        Err(TrackerError::Rejected(response.message))
    }
}

/// Resolve a full id or a unique id prefix against the known ids
fn resolve_id<'a>(
    entity_type: &'static str,
    raw: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> TrackerResult<String> {
    let raw = raw.trim();
    let not_found = || TrackerError::NotFound {
        entity_type,
        identifier: raw.to_string(),
    };
    if raw.is_empty() {
        return Err(not_found());
    }

    let matches: Vec<&str> = ids.into_iter().filter(|id| id.starts_with(raw)).collect();
    if let Some(exact) = matches.iter().copied().find(|id| *id == raw) {
        return Ok(exact.to_string());
    }
    match matches.as_slice() {
        [only] => Ok(only.to_string()),
        [] => Err(not_found()),
        _ => Err(TrackerError::Validation(format!(
            "Ambiguous {} id '{}' matches {} records",
            entity_type.to_lowercase(),
            raw,
            matches.len()
        ))),
    }
}

/// Resolve a category given by name (case-insensitive), id or id prefix
fn resolve_category<'a>(categories: &'a [Category], raw: &str) -> TrackerResult<&'a Category> {
    let wanted = raw.trim().to_lowercase();
    if let Some(category) = categories.iter().find(|c| c.name.to_lowercase() == wanted) {
        return Ok(category);
    }

    let id = resolve_id("Category", raw, categories.iter().map(|c| c.id.as_str()))?;
    categories
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| TrackerError::category_not_found(raw))
}
