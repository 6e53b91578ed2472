//! Year filter
//!
//! The dashboard can be restricted to a single calendar year or show all
//! data. The filter applies to the headline summary, the monthly series and
//! the category breakdown; yearly trend reports always run over the full set.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction::Transaction;

/// Selection of "all time" or a single year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearFilter {
    /// No restriction
    #[default]
    All,
    /// Only transactions from the given calendar year
    Year(i32),
}

impl YearFilter {
    /// Build a filter from an optional CLI argument
    pub fn from_arg(year: Option<i32>) -> Self {
        match year {
            Some(y) => Self::Year(y),
            None => Self::All,
        }
    }

    /// Apply the filter, returning an independent copy of the matching rows.
    ///
    /// Relative row order is preserved. A year with no matching transactions
    /// yields an empty vector, not an error.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        match self {
            Self::All => transactions.to_vec(),
            Self::Year(year) => transactions
                .iter()
                .filter(|t| t.year() == *year)
                .cloned()
                .collect(),
        }
    }

    /// Check whether the filter is `All`
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Time"),
            Self::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Distinct years present in a transaction set, newest first.
///
/// Matches the year selector of the dashboard: all years that occur in the
/// data, in reverse chronological order.
pub fn years_present(transactions: &[Transaction]) -> Vec<i32> {
    let mut years: Vec<i32> = transactions.iter().map(|t| t.year()).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            TransactionKind::Expense,
            "Misc",
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_all_returns_independent_copy() {
        let original = vec![txn(2023, 1, 5, 100), txn(2024, 2, 1, 200)];
        let mut filtered = YearFilter::All.apply(&original);
        assert_eq!(filtered, original);

        filtered[0].category = "Changed".to_string();
        assert_eq!(original[0].category, "Misc");
    }

    #[test]
    fn test_year_subset_preserves_order() {
        let transactions = vec![
            txn(2023, 3, 1, 100),
            txn(2024, 1, 1, 200),
            txn(2023, 1, 1, 300),
        ];
        let filtered = YearFilter::Year(2023).apply(&transactions);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.year() == 2023));
        // Relative order from the input, not date order
        assert_eq!(filtered[0].amount.cents(), 100);
        assert_eq!(filtered[1].amount.cents(), 300);
    }

    #[test]
    fn test_unmatched_year_yields_empty() {
        let transactions = vec![txn(2023, 1, 5, 100)];
        assert!(YearFilter::Year(2024).apply(&transactions).is_empty());
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(YearFilter::from_arg(None), YearFilter::All);
        assert_eq!(YearFilter::from_arg(Some(2023)), YearFilter::Year(2023));
        assert!(YearFilter::from_arg(None).is_all());
    }

    #[test]
    fn test_years_present_newest_first() {
        let transactions = vec![
            txn(2022, 5, 1, 100),
            txn(2024, 1, 1, 200),
            txn(2022, 7, 1, 300),
            txn(2023, 1, 1, 400),
        ];
        assert_eq!(years_present(&transactions), vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_years_present_empty() {
        assert!(years_present(&[]).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(YearFilter::All.to_string(), "All Time");
        assert_eq!(YearFilter::Year(2023).to_string(), "2023");
    }
}
