//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service and report layers.

pub mod expense;
pub mod report;

pub use expense::{handle_expense_command, handle_summary_command, ExpenseCommands};
pub use report::{handle_export_command, handle_report_command, ExportFormat};
