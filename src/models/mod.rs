//! Core data models for BudgetBuddy
//!
//! Expenses, the money type they are measured in, and the month key used to
//! bucket them.

pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
