//! Plain-text expense report
//!
//! Fixed-width ASCII layout with `#` bar charts for the category breakdown.

use std::io::{self, Write};
use std::path::Path;

use crate::display::format::{
    bar_divisor, double_separator, format_amount, format_bar, format_date, format_header,
    format_month, separator,
};
use crate::error::BudgetResult;
use crate::models::Expense;
use crate::storage::ExpenseSource;

use super::summarizer::{recent_entries, Summarizer};
use super::{create_report_file, report_write_error, RECENT_ENTRIES_LIMIT};

pub const TITLE: &str = "BUDGETBUDDY EXPENSE REPORT";

/// Width of the `=` banner framing the title
pub const BANNER_WIDTH: usize = 37;

/// Leading spaces before the title inside the banner
pub const TITLE_INDENT: usize = 7;

/// Width of the `-` rules between sections
pub const RULE_WIDTH: usize = 60;

/// Length of the bar for the largest category
pub const BAR_MAX_LEN: usize = 30;

pub const BAR_FILL: char = '#';

/// Writes plain-text expense reports
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportWriter;

impl TextReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report for every expense in `source` into the file at `path`
    pub fn write_report<S>(&self, path: impl AsRef<Path>, source: &S) -> BudgetResult<()>
    where
        S: ExpenseSource + ?Sized,
    {
        let path = path.as_ref();
        let expenses = source.find_all()?;

        let mut writer = create_report_file(path)?;
        self.render(&mut writer, &expenses)
            .and_then(|_| writer.flush())
            .map_err(|e| report_write_error(path, e))?;

        tracing::info!(path = %path.display(), expenses = expenses.len(), "wrote text report");
        println!("Text report written to: {}", path.display());
        Ok(())
    }

    pub fn render<W: Write>(&self, writer: &mut W, expenses: &[Expense]) -> io::Result<()> {
        let summarizer = Summarizer::new(expenses);

        write_header(writer)?;
        write_monthly_summary(writer, &summarizer)?;
        write_category_breakdown(writer, &summarizer)?;
        write_grand_total(writer, &summarizer)?;
        write_recent_entries(writer, expenses)
    }

    pub fn render_to_string(&self, expenses: &[Expense]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(&mut buf, expenses);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", double_separator(BANNER_WIDTH))?;
    writeln!(writer, "{}", format_header(TITLE, TITLE_INDENT, BANNER_WIDTH))?;
    writeln!(writer, "{}", double_separator(BANNER_WIDTH))?;
    writeln!(writer)
}

fn write_monthly_summary<W: Write>(writer: &mut W, summarizer: &Summarizer<'_>) -> io::Result<()> {
    writeln!(writer, "MONTHLY SUMMARY")?;
    writeln!(writer, "{}", separator(RULE_WIDTH))?;

    for (month, total) in summarizer.monthly_totals().iter() {
        writeln!(
            writer,
            "{:<10} : {:>12}",
            format_month(*month),
            format_amount(total)
        )?;
    }

    writeln!(writer)
}

fn write_category_breakdown<W: Write>(
    writer: &mut W,
    summarizer: &Summarizer<'_>,
) -> io::Result<()> {
    writeln!(writer, "CATEGORY BREAKDOWN (All Time)")?;
    writeln!(writer, "{}", separator(RULE_WIDTH))?;

    let totals = summarizer.category_totals(None);
    let max_amount = bar_divisor(totals.max_amount());

    for (category, total) in totals.iter() {
        writeln!(
            writer,
            "{:<15} {:>12}  {}",
            category,
            format_amount(total),
            format_bar(total, max_amount, BAR_MAX_LEN, BAR_FILL)
        )?;
    }

    writeln!(writer)
}

fn write_grand_total<W: Write>(writer: &mut W, summarizer: &Summarizer<'_>) -> io::Result<()> {
    writeln!(writer, "{}", separator(RULE_WIDTH))?;
    writeln!(
        writer,
        "GRAND TOTAL: {}",
        format_amount(summarizer.grand_total())
    )?;
    writeln!(writer, "{}", separator(RULE_WIDTH))
}

fn write_recent_entries<W: Write>(writer: &mut W, expenses: &[Expense]) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "RECENT ENTRIES (Last {})", RECENT_ENTRIES_LIMIT)?;
    writeln!(writer, "{}", separator(RULE_WIDTH))?;

    for expense in recent_entries(expenses, RECENT_ENTRIES_LIMIT) {
        writeln!(
            writer,
            "{}  {:<12} {:>10}  {}",
            format_date(expense.date),
            expense.category,
            format_amount(expense.amount),
            expense.notes
        )?;
    }

    Ok(())
}
