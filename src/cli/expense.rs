//! Expense CLI commands

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_list, format_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Month};
use crate::services::{ExpenseService, ImportService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Date spent (YYYY-MM-DD)
        date: String,
        /// Category label
        category: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// List the most recently stored expenses
    #[command(alias = "ls")]
    List {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Remove an expense by ID
    #[command(alias = "rm")]
    Remove {
        /// Expense ID (full UUID or short "exp-xxxxxxxx" form)
        id: String,
    },
    /// Import expenses from a CSV file with a date,category,amount[,notes] header
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            amount,
            notes,
        } => {
            let date = parse_date(&date)?;
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            let expense = service.add(date, &category, amount, &notes)?;
            println!("Added expense {}", expense.id);
            println!("  {}", expense);
        }
        ExpenseCommands::List { limit } => {
            let expenses = service.list(limit)?;
            print!("{}", format_expense_list(&expenses));
        }
        ExpenseCommands::Remove { id } => {
            let expense = service.remove(&id)?;
            println!("Removed expense {}", expense.id);
        }
        ExpenseCommands::Import { file } => {
            let importer = ImportService::new(storage, settings.import_date_format.clone());
            let result = importer.import_file(&file)?;

            println!(
                "Imported {} expense(s) from {}",
                result.imported_count(),
                file.display()
            );
            if result.has_errors() {
                println!("Skipped {} row(s):", result.errors.len());
                for err in &result.errors {
                    println!("  row {}: {}", err.row, err.message);
                }
            }
        }
    }

    Ok(())
}

/// Handle the summary command
pub fn handle_summary_command(storage: &Storage, month: Option<String>) -> BudgetResult<()> {
    let month = month
        .map(|m| Month::parse(&m).map_err(|e| BudgetError::Validation(e.to_string())))
        .transpose()?;

    let expenses = ExpenseService::new(storage).all()?;
    print!("{}", format_summary(&expenses, month));
    Ok(())
}

fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").unwrap_err().is_validation());
        assert!(parse_date("29/02/2024").is_err());
    }
}
