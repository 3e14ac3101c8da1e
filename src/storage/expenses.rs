//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Unlike a keyed
//! store, the repository keeps expenses in the order they were added: the
//! "recent entries" report section depends on that order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseSource;

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.expenses;

        tracing::debug!(count = data.len(), path = %self.path.display(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk in storage order
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)?;

        tracing::debug!(count = data.len(), path = %self.path.display(), "saved expenses");
        Ok(())
    }

    /// Append an expense
    pub fn add(&self, expense: Expense) -> Result<(), BudgetError> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.push(expense);
        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Find an expense by full or short ID
    pub fn find(&self, identifier: &str) -> Result<Option<Expense>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.iter().find(|e| e.id.matches(identifier)).cloned())
    }

    /// Remove an expense, returning it if it was present
    pub fn remove(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetError> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        Ok(data
            .iter()
            .position(|e| e.id == id)
            .map(|idx| data.remove(idx)))
    }

    /// Number of stored expenses
    pub fn len(&self) -> Result<usize, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }

    pub fn is_empty(&self) -> Result<bool, BudgetError> {
        Ok(self.len()? == 0)
    }
}

impl ExpenseSource for ExpenseRepository {
    fn find_all(&self) -> Result<Vec<Expense>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }
}
