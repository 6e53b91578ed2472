//! Expense breakdown by category
//!
//! Groups expense transactions by their category label and computes each
//! category's share of total spending. Income rows are ignored.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::display::{format_bar, format_percentage};
use crate::error::{FinsightError, FinsightResult};
use crate::models::{Money, Transaction};

/// One category's spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    /// Category label
    pub category: String,
    /// Total expense amount for this category
    pub total: Money,
    /// Share of total expenses, in percent
    pub percentage: f64,
}

/// Expense totals per category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    /// One row per category with expenses, largest total first
    pub rows: Vec<CategoryRow>,
    /// Total expenses across all categories
    pub total_expense: Money,
}

impl CategoryReport {
    /// Compute the breakdown.
    ///
    /// Covers exactly the categories present among expense rows. Rows are
    /// sorted by total descending, ties broken by category name, so output
    /// is deterministic for identical input.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_category: HashMap<&str, Money> = HashMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
        }

        let total_expense: Money = by_category.values().copied().sum();

        let mut rows: Vec<CategoryRow> = by_category
            .into_iter()
            .map(|(category, total)| {
                let percentage = if total_expense.is_zero() {
                    0.0
                } else {
                    total.cents() as f64 / total_expense.cents() as f64 * 100.0
                };
                CategoryRow {
                    category: category.to_string(),
                    total,
                    percentage,
                }
            })
            .collect();

        rows.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            rows,
            total_expense,
        }
    }

    /// Check whether there are any expense categories
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Top spending categories, largest first
    pub fn top_categories(&self, limit: usize) -> &[CategoryRow] {
        &self.rows[..self.rows.len().min(limit)]
    }

    /// Format the breakdown as a terminal table with bars
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<20} {:>12} {:>7}  {}\n",
            "Category", "Amount", "%", "Share"
        ));
        output.push_str(&"-".repeat(66));
        output.push('\n');

        let max = self
            .rows
            .first()
            .map(|r| r.total.cents() as f64)
            .unwrap_or(0.0);

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>7}  {}\n",
                row.category,
                row.total.to_string(),
                format_percentage(row.percentage),
                format_bar(row.total.cents() as f64, max, 24)
            ));
        }

        output.push_str(&"-".repeat(66));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            "Total",
            self.total_expense.to_string()
        ));

        output
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        writeln!(writer, "Category,Amount,Percentage")
            .map_err(|e| FinsightError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2}",
                row.category,
                row.total.cents() as f64 / 100.0,
                row.percentage
            )
            .map_err(|e| FinsightError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, category: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_groups_expenses_only() {
        let transactions = vec![
            txn(TransactionKind::Income, "Salary", 100_000),
            txn(TransactionKind::Expense, "Rent", 40_000),
            txn(TransactionKind::Expense, "Food", 5_000),
        ];

        let report = CategoryReport::generate(&transactions);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_expense, Money::from_cents(45_000));

        // Income category never appears
        assert!(report.rows.iter().all(|r| r.category != "Salary"));
    }

    #[test]
    fn test_sorted_by_total_descending() {
        let transactions = vec![
            txn(TransactionKind::Expense, "Food", 5_000),
            txn(TransactionKind::Expense, "Rent", 40_000),
            txn(TransactionKind::Expense, "Food", 2_000),
        ];

        let report = CategoryReport::generate(&transactions);
        assert_eq!(report.rows[0].category, "Rent");
        assert_eq!(report.rows[1].category, "Food");
        assert_eq!(report.rows[1].total, Money::from_cents(7_000));
    }

    #[test]
    fn test_ties_broken_by_name() {
        let transactions = vec![
            txn(TransactionKind::Expense, "Zoo", 1_000),
            txn(TransactionKind::Expense, "Art", 1_000),
        ];

        let report = CategoryReport::generate(&transactions);
        assert_eq!(report.rows[0].category, "Art");
        assert_eq!(report.rows[1].category, "Zoo");
    }

    #[test]
    fn test_percentages() {
        let transactions = vec![
            txn(TransactionKind::Expense, "Rent", 7_500),
            txn(TransactionKind::Expense, "Food", 2_500),
        ];

        let report = CategoryReport::generate(&transactions);
        assert!((report.rows[0].percentage - 75.0).abs() < f64::EPSILON);
        assert!((report.rows[1].percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_and_income_only_input() {
        assert!(CategoryReport::generate(&[]).is_empty());

        let income_only = vec![txn(TransactionKind::Income, "Salary", 100)];
        let report = CategoryReport::generate(&income_only);
        assert!(report.is_empty());
        assert_eq!(report.total_expense, Money::zero());
    }

    #[test]
    fn test_top_categories() {
        let transactions = vec![
            txn(TransactionKind::Expense, "A", 3_000),
            txn(TransactionKind::Expense, "B", 2_000),
            txn(TransactionKind::Expense, "C", 1_000),
        ];

        let report = CategoryReport::generate(&transactions);
        let top = report.top_categories(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "A");

        // Limit larger than the row count is fine
        assert_eq!(report.top_categories(10).len(), 3);
    }

    #[test]
    fn test_export_csv() {
        let transactions = vec![
            txn(TransactionKind::Expense, "Rent", 40_000),
            txn(TransactionKind::Expense, "Food", 5_000),
        ];

        let mut buf = Vec::new();
        CategoryReport::generate(&transactions)
            .export_csv(&mut buf)
            .unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Category,Amount,Percentage\n"));
        assert!(csv.contains("Rent,400.00"));
        assert!(csv.contains("Food,50.00"));
    }
}
