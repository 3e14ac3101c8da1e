//! Expense aggregation
//!
//! Groups an expense list into monthly and per-category totals. Keys keep the
//! order in which they were first seen in the input, not sorted order.

use crate::models::{Expense, Money, Month};

/// An insertion-ordered list of `(key, total)` pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTotals<K> {
    entries: Vec<(K, Money)>,
}

impl<K: PartialEq> OrderedTotals<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `amount` to the total for `key`, appending the key if unseen
    pub fn add(&mut self, key: K, amount: Money) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((key, amount)),
        }
    }

    pub fn get(&self, key: &K) -> Option<Money> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Money)> {
        self.entries.iter().map(|(k, total)| (k, *total))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all totals
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, total)| *total).sum()
    }

    /// Largest single total, `None` when empty
    pub fn max_amount(&self) -> Option<Money> {
        self.entries.iter().map(|(_, total)| *total).max()
    }
}

impl<K: PartialEq> Default for OrderedTotals<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> FromIterator<(K, Money)> for OrderedTotals<K> {
    fn from_iter<I: IntoIterator<Item = (K, Money)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (key, amount) in iter {
            totals.add(key, amount);
        }
        totals
    }
}

/// Computes report totals over one expense list
#[derive(Debug, Clone, Copy)]
pub struct Summarizer<'a> {
    expenses: &'a [Expense],
}

impl<'a> Summarizer<'a> {
    pub fn new(expenses: &'a [Expense]) -> Self {
        Self { expenses }
    }

    /// Totals per calendar month, in first-seen order
    pub fn monthly_totals(&self) -> OrderedTotals<Month> {
        self.expenses
            .iter()
            .map(|e| (e.month(), e.amount))
            .collect()
    }

    /// Totals per category, in first-seen order
    ///
    /// With `filter_month` set, only expenses in that month are counted and
    /// ordering follows the first occurrence within that month.
    pub fn category_totals(&self, filter_month: Option<Month>) -> OrderedTotals<String> {
        self.expenses
            .iter()
            .filter(|e| filter_month.map_or(true, |m| e.month() == m))
            .map(|e| (e.category.clone(), e.amount))
            .collect()
    }

    /// Total of one month
    pub fn month_total(&self, month: Month) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.month() == month)
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of every expense amount
    pub fn grand_total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

/// The last `limit` expenses in reverse storage order
///
/// Uses storage order, not date order: the trailing elements of the list are
/// taken to be the most recently added.
pub fn recent_entries(expenses: &[Expense], limit: usize) -> impl Iterator<Item = &Expense> {
    expenses.iter().rev().take(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(y: i32, m: u32, d: u32, category: &str, cents: i64, notes: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category,
            Money::from_cents(cents),
            notes,
        )
    }

    fn month(y: i32, m: u32) -> Month {
        Month::new(y, m).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(2024, 1, 5, "Food", 2000, "lunch"),
            expense(2024, 1, 20, "Food", 3000, "dinner"),
            expense(2024, 2, 1, "Transport", 1500, "bus"),
        ]
    }

    #[test]
    fn test_worked_example() {
        let expenses = sample();
        let summarizer = Summarizer::new(&expenses);

        let monthly = summarizer.monthly_totals();
        let months: Vec<_> = monthly.iter().collect();
        assert_eq!(
            months,
            vec![
                (&month(2024, 1), Money::from_cents(5000)),
                (&month(2024, 2), Money::from_cents(1500)),
            ]
        );

        let categories = summarizer.category_totals(None);
        assert_eq!(categories.get(&"Food".to_string()), Some(Money::from_cents(5000)));
        assert_eq!(
            categories.get(&"Transport".to_string()),
            Some(Money::from_cents(1500))
        );
        assert_eq!(categories.keys().collect::<Vec<_>>(), vec!["Food", "Transport"]);

        assert_eq!(summarizer.grand_total(), Money::from_cents(6500));

        let recent: Vec<_> = recent_entries(&expenses, 10).map(|e| e.notes.as_str()).collect();
        assert_eq!(recent, vec!["bus", "dinner", "lunch"]);
    }

    #[test]
    fn test_empty_input() {
        let summarizer = Summarizer::new(&[]);
        assert!(summarizer.monthly_totals().is_empty());
        assert!(summarizer.category_totals(None).is_empty());
        assert_eq!(summarizer.grand_total(), Money::zero());
        assert_eq!(summarizer.category_totals(None).max_amount(), None);
        assert_eq!(recent_entries(&[], 10).count(), 0);
    }

    #[test]
    fn test_months_in_first_seen_order_not_chronological() {
        let expenses = vec![
            expense(2024, 3, 1, "Rent", 100, ""),
            expense(2023, 12, 1, "Rent", 100, ""),
            expense(2024, 3, 15, "Food", 100, ""),
            expense(2024, 1, 2, "Food", 100, ""),
        ];
        let monthly = Summarizer::new(&expenses).monthly_totals();
        let keys: Vec<_> = monthly.keys().copied().collect();
        assert_eq!(keys, vec![month(2024, 3), month(2023, 12), month(2024, 1)]);
        assert_eq!(monthly.get(&month(2024, 3)), Some(Money::from_cents(200)));
    }

    #[test]
    fn test_same_month_different_years_are_distinct() {
        let expenses = vec![
            expense(2023, 5, 1, "Food", 100, ""),
            expense(2024, 5, 1, "Food", 200, ""),
        ];
        let monthly = Summarizer::new(&expenses).monthly_totals();
        assert_eq!(monthly.len(), 2);
    }

    #[test]
    fn test_category_filter_by_month() {
        let expenses = vec![
            expense(2024, 1, 5, "Food", 2000, ""),
            expense(2024, 2, 1, "Transport", 1500, ""),
            expense(2024, 2, 3, "Food", 700, ""),
            expense(2024, 1, 9, "Fun", 900, ""),
        ];
        let summarizer = Summarizer::new(&expenses);

        let february = summarizer.category_totals(Some(month(2024, 2)));
        assert_eq!(february.keys().collect::<Vec<_>>(), vec!["Transport", "Food"]);
        assert_eq!(february.total(), summarizer.month_total(month(2024, 2)));

        let direct: Money = expenses
            .iter()
            .filter(|e| e.month() == month(2024, 2))
            .map(|e| e.amount)
            .sum();
        assert_eq!(february.total(), direct);

        assert!(summarizer.category_totals(Some(month(2030, 1))).is_empty());
    }

    #[test]
    fn test_totals_agree_with_grand_total() {
        let categories = ["Food", "Rent", "Fun", "Travel", "Gifts"];
        let expenses: Vec<_> = (0..57)
            .map(|i| {
                expense(
                    2020 + (i % 3) as i32,
                    1 + (i % 12) as u32,
                    1 + (i % 28) as u32,
                    categories[i % categories.len()],
                    (i as i64 * 137) % 10_000,
                    "",
                )
            })
            .collect();
        let summarizer = Summarizer::new(&expenses);

        assert_eq!(summarizer.monthly_totals().total(), summarizer.grand_total());
        assert_eq!(summarizer.category_totals(None).total(), summarizer.grand_total());
    }

    #[test]
    fn test_recent_entries_limit() {
        let expenses: Vec<_> = (1..=15)
            .map(|d| expense(2024, 1, d, "Food", 100, &d.to_string()))
            .collect();
        let recent: Vec<_> = recent_entries(&expenses, 10).map(|e| e.notes.clone()).collect();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent.first().map(String::as_str), Some("15"));
        assert_eq!(recent.last().map(String::as_str), Some("6"));
    }

    #[test]
    fn test_ordered_totals_max() {
        let totals: OrderedTotals<&str> = vec![
            ("a", Money::from_cents(10)),
            ("b", Money::from_cents(30)),
            ("a", Money::from_cents(25)),
        ]
        .into_iter()
        .collect();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get(&"a"), Some(Money::from_cents(35)));
        assert_eq!(totals.max_amount(), Some(Money::from_cents(35)));
        assert_eq!(totals.keys().collect::<Vec<_>>(), vec![&"a", &"b"]);
    }

    #[test]
    fn test_totals_near_i64_limit_do_not_overflow() {
        let huge = Money::parse("92233720368547758.07").unwrap();
        let expenses = vec![
            Expense::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "Big", huge, ""),
            Expense::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), "Big", huge, ""),
        ];
        let summarizer = Summarizer::new(&expenses);

        assert_eq!(summarizer.grand_total(), Money::from_cents(i64::MAX));
        assert_eq!(
            summarizer.monthly_totals().get(&month(2024, 1)),
            Some(Money::from_cents(i64::MAX))
        );
        assert_eq!(
            summarizer.category_totals(None).get(&"Big".to_string()),
            Some(Money::from_cents(i64::MAX))
        );
    }
}
