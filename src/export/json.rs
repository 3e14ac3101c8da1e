//! JSON Export functionality
//!
//! Exports every stored expense with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseSource;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full expense export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Sum of all exported amounts
    pub total: Money,

    /// Expenses in storage order
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Snapshot every expense in `source`
    pub fn from_source<S: ExpenseSource + ?Sized>(source: &S) -> BudgetResult<Self> {
        let expenses = source.find_all()?;
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            total: expenses.iter().map(|e| e.amount).sum(),
            expenses,
        })
    }
}

/// Export all expenses to JSON
pub fn export_expenses_json<S, W>(source: &S, writer: &mut W, pretty: bool) -> BudgetResult<()>
where
    S: ExpenseSource + ?Sized,
    W: Write,
{
    let export = ExpenseExport::from_source(source)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))
}
