//! Terminal formatting for expense listings and summaries

use crate::models::{Expense, Month};
use crate::reports::Summarizer;

use super::format::{
    bar_divisor, format_amount, format_bar, format_date, format_month, separator, truncate,
};

const LIST_WIDTH: usize = 72;

/// Format one expense as a listing row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:12} {} {:15} {:>10}  {}",
        expense.id.short(),
        format_date(expense.date),
        truncate(&expense.category, 15),
        format_amount(expense.amount),
        truncate(&expense.notes, 24)
    )
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:15} {:>10}  {}\n",
        "ID", "Date", "Category", "Amount", "Notes"
    ));
    output.push_str(&separator(LIST_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Format monthly and category totals for the terminal
///
/// With `month` set, only that month's categories are shown.
pub fn format_summary(expenses: &[Expense], month: Option<Month>) -> String {
    let summarizer = Summarizer::new(expenses);
    let mut output = String::new();

    if month.is_none() {
        output.push_str("Monthly Totals\n");
        output.push_str(&separator(40));
        output.push('\n');
        for (m, total) in summarizer.monthly_totals().iter() {
            output.push_str(&format!("{:<10} {:>12}\n", format_month(*m), format_amount(total)));
        }
        output.push('\n');
    }

    let (heading, total) = match month {
        Some(m) => (
            format!("Categories for {}", format_month(m)),
            summarizer.month_total(m),
        ),
        None => ("Categories (All Time)".to_string(), summarizer.grand_total()),
    };

    output.push_str(&heading);
    output.push('\n');
    output.push_str(&separator(40));
    output.push('\n');

    let categories = summarizer.category_totals(month);
    let max_amount = bar_divisor(categories.max_amount());
    for (category, amount) in categories.iter() {
        output.push_str(&format!(
            "{:<15} {:>12}  {}\n",
            truncate(category, 15),
            format_amount(amount),
            format_bar(amount, max_amount, 20, '#')
        ));
    }

    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("{:<15} {:>12}\n", "TOTAL", format_amount(total)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(m: u32, category: &str, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, m, 3).unwrap(),
            category,
            Money::from_cents(cents),
            "note",
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_list_contains_rows() {
        let expenses = vec![expense(1, "Food", 1234)];
        let output = format_expense_list(&expenses);
        assert!(output.contains("2024-01-03"));
        assert!(output.contains("12.34"));
        assert!(output.contains(&expenses[0].id.short()));
    }

    #[test]
    fn test_summary_all_time() {
        let expenses = vec![expense(1, "Food", 2000), expense(2, "Rent", 5000)];
        let output = format_summary(&expenses, None);
        assert!(output.contains("Monthly Totals"));
        assert!(output.contains("2024-02"));
        assert!(output.contains("Categories (All Time)"));
        assert!(output.contains(&format!("{:<15} {:>12}\n", "TOTAL", "70.00")));
    }

    #[test]
    fn test_summary_for_month() {
        let expenses = vec![expense(1, "Food", 2000), expense(2, "Rent", 5000)];
        let output = format_summary(&expenses, Month::new(2024, 2));
        assert!(!output.contains("Monthly Totals"));
        assert!(output.contains("Categories for 2024-02"));
        assert!(output.contains("Rent"));
        assert!(!output.contains("Food"));
        assert!(output.contains(&format!("{:<15} {:>12}\n", "TOTAL", "50.00")));
    }
}
