//! Display formatting for BudgetBuddy
//!
//! Pure formatting helpers used by the report writers, plus terminal
//! listings for the CLI.

pub mod expense;
pub mod format;

pub use expense::{format_expense_list, format_expense_row, format_summary};
pub use format::{format_amount, format_date, format_month};
