//! Transaction table rendering
//!
//! Renders the first rows of a loaded file as a table, mirroring the data
//! preview at the top of the dashboard.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

/// A transaction formatted for table display
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            amount: txn.amount.to_string(),
        }
    }
}

/// Render the first `limit` transactions as a table
pub fn preview_table(transactions: &[Transaction], limit: usize) -> String {
    let rows: Vec<TransactionRow> = transactions.iter().take(limit).map(Into::into).collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    fn txn(d: u32, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2023, 1, d).unwrap(),
            TransactionKind::Expense,
            "Rent",
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_preview_contains_rows() {
        let transactions = vec![txn(5, 40_000), txn(6, 5_000)];
        let table = preview_table(&transactions, 10);

        assert!(table.contains("2023-01-05"));
        assert!(table.contains("Rent"));
        assert!(table.contains("$400.00"));
    }

    #[test]
    fn test_preview_respects_limit() {
        let transactions: Vec<Transaction> = (1..=20).map(|d| txn(d, 100)).collect();
        let table = preview_table(&transactions, 3);

        assert!(table.contains("2023-01-03"));
        assert!(!table.contains("2023-01-04"));
    }
}
