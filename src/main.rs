use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetbuddy::cli::{
    handle_expense_command, handle_export_command, handle_report_command, handle_summary_command,
    ExpenseCommands, ExportFormat,
};
use budgetbuddy::config::{BudgetPaths, Settings};
use budgetbuddy::reports::ReportFormat;
use budgetbuddy::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budgetbuddy",
    version,
    about = "Track expenses and render monthly/category reports",
    long_about = "BudgetBuddy records expenses and renders them into HTML or \
                  plain-text reports with monthly totals, a category breakdown \
                  and the most recent entries."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show monthly and category totals in the terminal
    Summary {
        /// Restrict the category breakdown to one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Write an expense report to a file
    Report {
        /// Output file path (overwritten if present)
        output: PathBuf,

        /// Report format; inferred from the file extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Export all expenses to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    budgetbuddy::logging::init();
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Summary { month }) => handle_summary_command(&storage, month)?,
        Some(Commands::Report { output, format }) => {
            handle_report_command(&storage, &settings, output, format)?
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export_command(&storage, output, format, pretty)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialized BudgetBuddy at: {}", paths.base_dir().display());
            println!();
            println!(
                "Run 'budgetbuddy expense add <date> <category> <amount>' to record an expense."
            );
        }
        Some(Commands::Config) => {
            println!("BudgetBuddy Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default report format: {}", settings.default_report_format);
            println!("  Import date format:    {}", settings.import_date_format);
        }
        None => {
            println!("BudgetBuddy - expense tracking and reports");
            println!();
            println!("Run 'budgetbuddy --help' for usage information.");
        }
    }

    Ok(())
}
