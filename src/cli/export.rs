//! CLI commands for data export

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{self, DashboardExport};
use crate::store::Store;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export everything the dashboard shows
    Dashboard {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export all transactions
    Transactions {
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(
    store: &Store,
    settings: &Settings,
    cmd: ExportCommands,
) -> TrackerResult<()> {
    match cmd {
        ExportCommands::Dashboard {
            format,
            output,
            pretty,
        } => {
            let snapshot = DashboardExport::from_store(store, settings)?;
            write_output(output.as_deref(), |writer| match format {
                ExportFormat::Csv => export::export_dashboard_csv(&snapshot, writer),
                ExportFormat::Json => export::export_dashboard_json(&snapshot, writer, pretty),
            })?;
            if let Some(path) = output {
                println!("Dashboard exported to: {}", path.display());
            }
        }

        ExportCommands::Transactions {
            format,
            output,
            pretty,
        } => {
            write_output(output.as_deref(), |writer| match format {
                ExportFormat::Csv => export::export_transactions_csv(store, writer),
                ExportFormat::Json => export::export_transactions_json(store, writer, pretty),
            })?;
            if let Some(path) = output {
                println!("Transactions exported to: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Run `write` against the output file, or stdout when no path is given
fn write_output(
    output: Option<&Path>,
    write: impl FnOnce(&mut dyn Write) -> TrackerResult<()>,
) -> TrackerResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write(&mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))
        }
    }
}
