//! CSV Export functionality
//!
//! Writes expenses in the same column layout the importer reads, so an
//! export can be imported again.

use std::io::Write;

use crate::display::format::format_date;
use crate::error::{BudgetError, BudgetResult};
use crate::storage::ExpenseSource;

/// Export all expenses to CSV in storage order
pub fn export_expenses_csv<S, W>(source: &S, writer: &mut W) -> BudgetResult<()>
where
    S: ExpenseSource + ?Sized,
    W: Write,
{
    let export_err = |e: csv::Error| BudgetError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "date", "category", "amount", "notes"])
        .map_err(export_err)?;

    for expense in source.find_all()? {
        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                format_date(expense.date),
                expense.category,
                expense.amount.to_string(),
                expense.notes,
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))
}
