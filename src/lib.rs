//! BudgetBuddy - expense tracking with HTML and plain-text reports
//!
//! # Architecture
//!
//! - `models`: expenses, money and month keys
//! - `storage`: JSON file storage and the `ExpenseSource` seam
//! - `reports`: aggregation and the HTML/text report writers
//! - `display`: formatting helpers and terminal listings
//! - `services`: validated expense management and CSV import
//! - `export`: CSV, JSON and YAML export
//! - `config`: paths and user settings
//! - `cli`: command handlers for the `budgetbuddy` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use budgetbuddy::models::{Expense, Money};
//! use budgetbuddy::reports::HtmlReportWriter;
//! use chrono::NaiveDate;
//!
//! let expenses = vec![Expense::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!     "Food",
//!     Money::from_cents(2000),
//!     "lunch",
//! )];
//! HtmlReportWriter::new().write_report("report.html", &expenses)?;
//! # Ok::<(), budgetbuddy::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
