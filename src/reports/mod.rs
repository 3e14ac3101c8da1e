//! Reports module for BudgetBuddy
//!
//! Aggregates the expense list into monthly and category totals and renders
//! them as HTML or plain-text documents.

pub mod html;
pub mod summarizer;
pub mod text;

pub use html::HtmlReportWriter;
pub use summarizer::{recent_entries, OrderedTotals, Summarizer};
pub use text::TextReportWriter;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::storage::ExpenseSource;

/// Number of expenses listed in the "recent entries" section
pub const RECENT_ENTRIES_LIMIT: usize = 10;

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Styled, self-contained HTML document
    #[default]
    Html,
    /// Fixed-width plain text
    #[value(alias = "txt")]
    #[serde(alias = "txt")]
    Text,
}

impl ReportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
        }
    }

    /// Infer the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(Self::Html),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Render a report in this format to `path`
    pub fn write_report<S>(&self, path: impl AsRef<Path>, source: &S) -> BudgetResult<()>
    where
        S: ExpenseSource + ?Sized,
    {
        match self {
            Self::Html => HtmlReportWriter::new().write_report(path, source),
            Self::Text => TextReportWriter::new().write_report(path, source),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Open `path` for writing, truncating any existing file
pub(crate) fn create_report_file(path: &Path) -> BudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

pub(crate) fn report_write_error(path: &Path, err: std::io::Error) -> BudgetError {
    BudgetError::Export(format!("Failed to write {}: {}", path.display(), err))
}
