//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for the CLI. Amounts are shown with
//! the configured currency symbol and dates with the configured format.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{format_budget_details, format_budget_list};
pub use category::{format_category_details, format_category_list};
pub use transaction::{format_transaction_details, format_transaction_list};

use std::collections::HashMap;

use crate::models::{Category, UNCATEGORIZED_NAME};

/// Category names keyed by id, for resolving references in listings
pub struct CategoryNames<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> CategoryNames<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            names: categories
                .iter()
                .map(|c| (c.id.as_str(), c.name.as_str()))
                .collect(),
        }
    }

    /// Name for a category reference; missing and dangling references both
    /// show as uncategorized
    pub fn resolve(&self, category_id: Option<&str>) -> &'a str {
        category_id
            .and_then(|id| self.names.get(id).copied())
            .unwrap_or(UNCATEGORIZED_NAME)
    }
}

/// First eight characters of an id, enough to tell rows apart
pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Pad or cut a string to exactly `width` characters
pub(crate) fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
