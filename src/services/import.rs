//! CSV Import service
//!
//! Imports expenses from CSV files with a header row. Columns are located by
//! header name, so their order does not matter:
//!
//! | header             | required | aliases                  |
//! |--------------------|----------|--------------------------|
//! | `date`             | yes      |                          |
//! | `category`         | yes      |                          |
//! | `amount`           | yes      |                          |
//! | `notes`            | no       | `note`, `memo`, `description` |
//!
//! Rows that fail to parse are reported and skipped; valid rows are appended
//! in file order.

use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub category_column: usize,
    pub amount_column: usize,
    pub notes_column: Option<usize>,
}

impl ColumnMapping {
    /// Resolve columns from CSV headers (case-insensitive)
    pub fn from_headers(headers: &StringRecord) -> BudgetResult<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };
        let required = |name: &str| {
            find(&[name]).ok_or_else(|| {
                BudgetError::Import(format!("Missing required column '{}'", name))
            })
        };

        Ok(Self {
            date_column: required("date")?,
            category_column: required("category")?,
            amount_column: required("amount")?,
            notes_column: find(&["notes", "note", "memo", "description"]),
        })
    }
}

/// A row that could not be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub message: String,
}

/// Outcome of parsing or importing a CSV file
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: Vec<Expense>,
    pub errors: Vec<RowError>,
}

impl ImportResult {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Service for importing expenses from CSV
pub struct ImportService<'a> {
    storage: &'a Storage,
    date_format: String,
}

impl<'a> ImportService<'a> {
    /// Create an import service parsing dates with `date_format` (strftime)
    pub fn new(storage: &'a Storage, date_format: impl Into<String>) -> Self {
        Self {
            storage,
            date_format: date_format.into(),
        }
    }

    /// Parse expenses from a CSV reader without storing them
    pub fn parse_csv_from_reader<R: std::io::Read>(
        &self,
        reader: &mut Reader<R>,
    ) -> BudgetResult<ImportResult> {
        let headers = reader
            .headers()
            .map_err(|e| BudgetError::Import(format!("Failed to read CSV header: {}", e)))?
            .clone();
        let mapping = ColumnMapping::from_headers(&headers)?;

        let mut result = ImportResult::default();
        for (idx, record) in reader.records().enumerate() {
            let row = idx + 1;
            let parsed = record
                .map_err(|e| format!("Error reading CSV record: {}", e))
                .and_then(|record| self.parse_record(&record, &mapping));

            match parsed {
                Ok(expense) => result.imported.push(expense),
                Err(message) => {
                    tracing::warn!(row, %message, "skipping CSV row");
                    result.errors.push(RowError { row, message });
                }
            }
        }

        Ok(result)
    }

    /// Parse a CSV file and append every valid row to storage
    pub fn import_file(&self, path: &Path) -> BudgetResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| {
                BudgetError::Import(format!("Failed to open {}: {}", path.display(), e))
            })?;

        let result = self.parse_csv_from_reader(&mut reader)?;

        for expense in &result.imported {
            self.storage.expenses.add(expense.clone())?;
        }
        if !result.imported.is_empty() {
            self.storage.expenses.save()?;
        }

        tracing::info!(
            path = %path.display(),
            imported = result.imported_count(),
            skipped = result.errors.len(),
            "CSV import finished"
        );
        Ok(result)
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
    ) -> Result<Expense, String> {
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .map(str::trim)
                .ok_or_else(|| format!("Missing {} column", name))
        };

        let date_str = field(mapping.date_column, "date")?;
        let date = NaiveDate::parse_from_str(date_str, &self.date_format)
            .map_err(|_| format!("Invalid date '{}' (expected {})", date_str, self.date_format))?;

        let amount_str = field(mapping.amount_column, "amount")?;
        let amount = Money::parse(amount_str).map_err(|e| e.to_string())?;

        let category = field(mapping.category_column, "category")?;

        let notes = mapping
            .notes_column
            .and_then(|col| record.get(col))
            .map(str::trim)
            .unwrap_or_default();

        let expense = Expense::new(date, category, amount, notes);
        expense.validate().map_err(|e| e.to_string())?;
        Ok(expense)
    }
}
