use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finance_tracker::cli::{
    handle_budget_command, handle_category_command, handle_export_command,
    handle_report_command, handle_transaction_command, BudgetCommands, CategoryCommands,
    ExportCommands, ReportCommands, TransactionCommands,
};
use finance_tracker::config::paths::DATA_DIR_ENV;
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::logging::init_logging;
use finance_tracker::store::Store;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker",
    long_about = "fintrack records your spending, groups it into categories and \
                  compares it against monthly budgets, all from the command line."
)]
struct Cli {
    /// Directory holding settings and data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export dashboard data or transactions
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring unreadable settings, using defaults");
        Settings::default()
    });
    let store = Store::open(paths.clone())
        .with_context(|| format!("Failed to open data directory {}", paths.data_dir().display()))?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&store, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&store, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&store, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&store, &settings, cmd)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Recent transactions:  {}", settings.recent_transaction_count);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report summary' for an overview of your spending.");
        }
    }

    Ok(())
}
