//! HTML expense report
//!
//! Writes a single self-contained document with an inline stylesheet.
//! Category names and notes are written as given, without escaping.

use std::io::{self, Write};
use std::path::Path;

use crate::display::format::{bar_divisor, bar_units, format_amount, format_date, format_month};
use crate::error::BudgetResult;
use crate::models::{Expense, Money};
use crate::storage::ExpenseSource;

use super::summarizer::{recent_entries, Summarizer};
use super::{create_report_file, report_write_error, RECENT_ENTRIES_LIMIT};

/// Document title, also used as the page heading
pub const TITLE: &str = "BudgetBuddy Expense Report";

/// Width in pixels of the bar for the largest category
pub const BAR_MAX_WIDTH_PX: usize = 200;

const STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
h1 { color: #333; }
table { border-collapse: collapse; width: 100%; margin-bottom: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #4CAF50; color: white; }
.bar { background-color: #4CAF50; height: 20px; display: inline-block; }
.total { font-weight: bold; font-size: 1.2em; color: #4CAF50; }
";

/// Writes HTML expense reports
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReportWriter;

impl HtmlReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report for every expense in `source` into the file at `path`
    ///
    /// Creates or overwrites the file. On a write failure the partially
    /// written file is left in place.
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

        tracing::info!(path = %path.display(), expenses = expenses.len(), "wrote HTML report");
        println!("HTML report written to: {}", path.display());
        Ok(())
    }

    /// Render the report into any writer
    pub fn render<W: Write>(&self, writer: &mut W, expenses: &[Expense]) -> io::Result<()> {
        let summarizer = Summarizer::new(expenses);

        write_header(writer)?;
        write_monthly_summary(writer, &summarizer)?;
        write_category_breakdown(writer, &summarizer)?;
        write_grand_total(writer, &summarizer)?;
        write_recent_entries(writer, expenses)?;
        write_footer(writer)
    }

    /// Render the report into a string
    pub fn render_to_string(&self, expenses: &[Expense]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(&mut buf, expenses);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>\n<head>")?;
    writeln!(writer, "<title>{}</title>", TITLE)?;
    writeln!(writer, "<style>")?;
    write!(writer, "{}", STYLESHEET)?;
    writeln!(writer, "</style>")?;
    writeln!(writer, "</head>\n<body>")?;
    writeln!(writer, "<h1>{}</h1>", TITLE)
}

fn write_monthly_summary<W: Write>(writer: &mut W, summarizer: &Summarizer<'_>) -> io::Result<()> {
    writeln!(writer, "<h2>Monthly Summary</h2>")?;
    writeln!(writer, "<table>")?;
    writeln!(writer, "<tr><th>Month</th><th>Total Amount</th></tr>")?;

    for (month, total) in summarizer.monthly_totals().iter() {
        writeln!(
            writer,
            "<tr><td>{}</td><td>{}</td></tr>",
            format_month(*month),
            format_amount(total)
        )?;
    }

    writeln!(writer, "</table>")
}

fn write_category_breakdown<W: Write>(
    writer: &mut W,
    summarizer: &Summarizer<'_>,
) -> io::Result<()> {
    writeln!(writer, "<h2>Category Breakdown (All Time)</h2>")?;
    writeln!(writer, "<table>")?;
    writeln!(
        writer,
        "<tr><th>Category</th><th>Total Amount</th><th>Visual</th></tr>"
    )?;

    let totals = summarizer.category_totals(None);
    let max_amount = bar_divisor(totals.max_amount());

    for (category, total) in totals.iter() {
        writeln!(
            writer,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            category,
            format_amount(total),
            bar_html(total, max_amount)
        )?;
    }

    writeln!(writer, "</table>")
}

fn write_grand_total<W: Write>(writer: &mut W, summarizer: &Summarizer<'_>) -> io::Result<()> {
    writeln!(
        writer,
        "<p class=\"total\">Grand Total: {}</p>",
        format_amount(summarizer.grand_total())
    )
}

fn write_recent_entries<W: Write>(writer: &mut W, expenses: &[Expense]) -> io::Result<()> {
    writeln!(writer, "<h2>Recent Entries (Last {})</h2>", RECENT_ENTRIES_LIMIT)?;
    writeln!(writer, "<table>")?;
    writeln!(
        writer,
        "<tr><th>Date</th><th>Category</th><th>Amount</th><th>Notes</th></tr>"
    )?;

    for expense in recent_entries(expenses, RECENT_ENTRIES_LIMIT) {
        writeln!(
            writer,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            format_date(expense.date),
            expense.category,
            format_amount(expense.amount),
            expense.notes
        )?;
    }

    writeln!(writer, "</table>")
}

fn write_footer<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "</body>\n</html>")
}

/// Bar element whose pixel width is proportional to `value / max_value`
pub fn bar_html(value: Money, max_value: f64) -> String {
    format!(
        "<div class=\"bar\" style=\"width: {}px;\"></div>",
        bar_units(value, max_value, BAR_MAX_WIDTH_PX)
    )
}
