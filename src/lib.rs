//! finance-tracker - personal finance tracking
//!
//! This library records transactions, organizes them into categories,
//! tracks monthly budgets and derives the spending figures a dashboard
//! shows.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path and settings management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, money)
//! - `store`: JSON document store, one file per collection
//! - `repositories`: Validated CRUD over the store
//! - `reports`: Monthly, category and budget-vs-actual reports
//! - `actions`: Never-failing entry points for a presentation layer
//! - `cli`, `display`, `export`: The `fintrack` command line front end
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_tracker::actions::Actions;
//! use finance_tracker::config::paths::TrackerPaths;
//! use finance_tracker::models::TransactionInput;
//! use finance_tracker::store::Store;
//!
//! # fn main() -> Result<(), finance_tracker::TrackerError> {
//! let store = Store::open(TrackerPaths::new()?)?;
//! let actions = Actions::new(&store);
//!
//! let response = actions.create_transaction(&TransactionInput::new("12.50", "Lunch"));
//! assert!(response.success);
//! println!("{:?}", actions.get_monthly_expenses());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod repositories;
pub mod store;

pub use error::{TrackerError, TrackerResult};
