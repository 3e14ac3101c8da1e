//! Expense service
//!
//! Validated creation, listing and removal of expenses on top of the
//! repository. Every mutation is persisted immediately.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};
use crate::storage::{ExpenseSource, Storage};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(
        &self,
        date: NaiveDate,
        category: &str,
        amount: Money,
        notes: &str,
    ) -> BudgetResult<Expense> {
        let expense = Expense::new(date, category.trim(), amount, notes.trim());
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.expenses.add(expense.clone())?;
        self.storage.expenses.save()?;

        tracing::info!(
            id = %expense.id,
            category = %expense.category,
            amount = %expense.amount,
            "added expense"
        );
        Ok(expense)
    }

    /// All expenses in storage order
    pub fn all(&self) -> BudgetResult<Vec<Expense>> {
        self.storage.expenses.find_all()
    }

    /// Most recently stored expenses first, at most `limit` of them
    pub fn list(&self, limit: usize) -> BudgetResult<Vec<Expense>> {
        let expenses = self.storage.expenses.find_all()?;
        Ok(expenses.into_iter().rev().take(limit).collect())
    }

    /// Remove an expense by full or short ID
    pub fn remove(&self, identifier: &str) -> BudgetResult<Expense> {
        let expense = self
            .storage
            .expenses
            .find(identifier)?
            .ok_or_else(|| BudgetError::expense_not_found(identifier))?;

        self.storage.expenses.remove(expense.id)?;
        self.storage.expenses.save()?;

        tracing::info!(id = %expense.id, "removed expense");
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn test_add_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(date(1), "  Food ", Money::from_cents(1250), " lunch ")
            .unwrap();
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.notes, "lunch");

        let mut reloaded = Storage::new(storage.paths().clone()).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.expenses.find_all().unwrap(), vec![expense]);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.add(date(1), "   ", Money::from_cents(100), "").unwrap_err();
        assert!(err.is_validation());

        let err = service.add(date(1), "Food", Money::from_cents(-100), "").unwrap_err();
        assert!(err.is_validation());

        assert!(service.all().unwrap().is_empty());
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        for (i, category) in ["A", "B", "C"].iter().enumerate() {
            service
                .add(date(10 - i as u32), category, Money::from_cents(100), "")
                .unwrap();
        }

        let listed: Vec<_> = service.list(2).unwrap().into_iter().map(|e| e.category).collect();
        assert_eq!(listed, vec!["C", "B"]);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add(date(1), "Food", Money::from_cents(100), "").unwrap();
        let removed = service.remove(&expense.id.short()).unwrap();
        assert_eq!(removed.id, expense.id);

        let err = service.remove(&expense.id.short()).unwrap_err();
        assert!(err.is_not_found());
    }
}
