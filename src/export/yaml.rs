//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::ExpenseExport;
use crate::storage::ExpenseSource;

/// Export all expenses to YAML
pub fn export_expenses_yaml<S, W>(source: &S, writer: &mut W) -> BudgetResult<()>
where
    S: ExpenseSource + ?Sized,
    W: Write,
{
    let export = ExpenseExport::from_source(source)?;
    let export_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# BudgetBuddy Expense Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))
}
