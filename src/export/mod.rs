//! Export module for BudgetBuddy
//!
//! - CSV: spreadsheet-compatible, re-importable
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_expenses_yaml;
