//! Transaction model
//!
//! A transaction is one row of the loaded CSV: a date, an income/expense
//! classification, a free-form category label, and an amount. The set of
//! loaded transactions is immutable for the lifetime of one invocation;
//! every report is recomputed from it in full.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Income or expense classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in (salary, refunds, ...)
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Parse the `Type` column value ("Income" or "Expense", case-insensitive)
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!(
                "Unknown transaction type '{}' (expected Income or Expense)",
                trimmed
            )),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// One financial record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-form category label (e.g. "Rent", "Food")
    pub category: String,

    /// Transaction amount
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            amount,
        }
    }

    /// Calendar year of the transaction date
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month identifier in "YYYY-MM" form.
    ///
    /// Lexicographic order of month keys equals chronological order, so
    /// sorted report rows come out in calendar order for free.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(y: i32, m: u32, d: u32, kind: TransactionKind, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            kind,
            "Misc",
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            TransactionKind::parse("Income").unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            TransactionKind::parse(" expense ").unwrap(),
            TransactionKind::Expense
        );
        assert!(TransactionKind::parse("Transfer").is_err());
    }

    #[test]
    fn test_derived_fields() {
        let t = txn(2023, 1, 5, TransactionKind::Income, 100_000);
        assert_eq!(t.year(), 2023);
        assert_eq!(t.month_key(), "2023-01");
    }

    #[test]
    fn test_month_key_zero_pads() {
        let t = txn(2024, 9, 30, TransactionKind::Expense, 500);
        assert_eq!(t.month_key(), "2024-09");
    }

    #[test]
    fn test_kind_checks() {
        assert!(txn(2023, 1, 5, TransactionKind::Income, 100).is_income());
        assert!(txn(2023, 1, 5, TransactionKind::Expense, 100).is_expense());
    }

    #[test]
    fn test_display() {
        let t = Transaction::new(
            NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(),
            TransactionKind::Expense,
            "Rent",
            Money::from_cents(40_000),
        );
        assert_eq!(format!("{}", t), "2023-01-20 Expense Rent $400.00");
    }

    #[test]
    fn test_serde_round_trip() {
        let t = txn(2023, 2, 1, TransactionKind::Expense, 5_000);
        let json = serde_json::to_string(&t).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
