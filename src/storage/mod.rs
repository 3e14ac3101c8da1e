//! Storage layer for BudgetBuddy
//!
//! Provides JSON file storage with atomic writes and the `ExpenseSource`
//! seam that the report writers read from.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::Expense;

/// Anything that can hand out the full expense list in storage order
pub trait ExpenseSource {
    fn find_all(&self) -> Result<Vec<Expense>, BudgetError>;
}

impl ExpenseSource for [Expense] {
    fn find_all(&self) -> Result<Vec<Expense>, BudgetError> {
        Ok(self.to_vec())
    }
}

impl ExpenseSource for Vec<Expense> {
    fn find_all(&self) -> Result<Vec<Expense>, BudgetError> {
        Ok(self.clone())
    }
}

/// Main storage coordinator
pub struct Storage {
    paths: BudgetPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.expenses.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgetError> {
        self.expenses.save()
    }
}
