//! Expense model
//!
//! One recorded spending event. Expenses are created by the service layer or
//! the CSV importer and are never mutated by the reporting code.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Date the money was spent
    pub date: NaiveDate,

    /// Free-text category label
    pub category: String,

    /// Amount spent
    pub amount: Money,

    /// Free-text note
    #[serde(default)]
    pub notes: String,

    /// When the record was stored
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category: category.into(),
            amount,
            notes: notes.into(),
            created_at: Utc::now(),
        }
    }

    /// The calendar month this expense belongs to
    pub fn month(&self) -> Month {
        Month::of(self.date)
    }

    /// Validate fields supplied by a user
    ///
    /// The reporting code never calls this; it renders whatever it is given.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.notes
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
