//! Export module for the finance tracker
//!
//! Writes the dashboard data or the raw transaction list in two formats:
//! - CSV: for spreadsheets
//! - JSON: for other programs, with a schema version

pub mod csv;
pub mod dashboard;
pub mod json;

pub use self::csv::{export_dashboard_csv, export_transactions_csv};
pub use self::dashboard::{DashboardExport, EXPORT_SCHEMA_VERSION};
pub use self::json::{export_dashboard_json, export_transactions_json};
