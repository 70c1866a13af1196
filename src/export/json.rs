//! JSON export functionality

use serde::Serialize;
use std::io::Write;

use super::DashboardExport;
use crate::error::{TrackerError, TrackerResult};
use crate::repositories::TransactionRepository;
use crate::store::Store;

fn write_json<W: Write + ?Sized, T: Serialize>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> TrackerResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    };
    result.map_err(|e| TrackerError::Export(format!("Failed to write JSON: {}", e)))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))
}

/// Export the dashboard snapshot as JSON
pub fn export_dashboard_json<W: Write + ?Sized>(
    export: &DashboardExport,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    write_json(writer, export, pretty)
}

/// Export all transactions, newest first, as a JSON array
pub fn export_transactions_json<W: Write + ?Sized>(
    store: &Store,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let transactions = TransactionRepository::new(store).list()?;
    write_json(writer, &transactions, pretty)
}
