//! Service layer for BudgetBuddy
//!
//! Validation and persistence on top of the storage layer.

pub mod expense;
pub mod import;

pub use expense::ExpenseService;
pub use import::{ColumnMapping, ImportResult, ImportService, RowError};
