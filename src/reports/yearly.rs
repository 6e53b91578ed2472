//! Yearly trend reports
//!
//! Per-year income/expense/net totals and per-year category spending.
//! Both reports are meant to run over the full, unfiltered transaction set:
//! the year filter applies to the monthly and category views only, while the
//! yearly trends always show the whole history.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Money, Transaction};

/// One year of the trend series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyRow {
    /// Calendar year
    pub year: i32,
    /// Income total for the year (zero if none)
    pub income: Money,
    /// Expense total for the year (zero if none)
    pub expense: Money,
    /// Income minus expenses for the year
    pub net: Money,
}

/// Yearly income, expense and net balance series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyReport {
    /// One row per year present in the input, ascending by year
    pub rows: Vec<YearlyRow>,
}

impl YearlyReport {
    /// Compute the series over the given (full) transaction set.
    ///
    /// Same pivot as the monthly series, keyed by year: a year with only
    /// one kind of transaction gets a zero for the other.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_year: BTreeMap<i32, (Money, Money)> = BTreeMap::new();

        for txn in transactions {
            let entry = by_year
                .entry(txn.year())
                .or_insert((Money::zero(), Money::zero()));
            if txn.is_income() {
                entry.0 += txn.amount;
            } else {
                entry.1 += txn.amount;
            }
        }

        let rows = by_year
            .into_iter()
            .map(|(year, (income, expense))| YearlyRow {
                year,
                income,
                expense,
                net: income - expense,
            })
            .collect();

        Self { rows }
    }

    /// Check whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the series as a terminal table
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<6} {:>14} {:>14} {:>14}\n",
            "Year", "Income", "Expense", "Net"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<6} {:>14} {:>14} {:>14}\n",
                row.year,
                row.income.to_string(),
                row.expense.to_string(),
                row.net.to_string()
            ));
        }

        output
    }

    /// Export the series to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        writeln!(writer, "Year,Income,Expense,Net")
            .map_err(|e| FinsightError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                row.year,
                row.income.cents() as f64 / 100.0,
                row.expense.cents() as f64 / 100.0,
                row.net.cents() as f64 / 100.0
            )
            .map_err(|e| FinsightError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

/// One (year, category) expense total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyCategoryRow {
    /// Calendar year
    pub year: i32,
    /// Category label
    pub category: String,
    /// Expense total for this category in this year
    pub total: Money,
}

/// Expense totals per year and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyCategoryReport {
    /// One row per (year, category) pair with expenses, sorted by year then
    /// category
    pub rows: Vec<YearlyCategoryRow>,
}

impl YearlyCategoryReport {
    /// Compute the breakdown over the given (full) transaction set.
    ///
    /// Only expense rows contribute; pairs with no expenses do not appear.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_pair: BTreeMap<(i32, String), Money> = BTreeMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            *by_pair
                .entry((txn.year(), txn.category.clone()))
                .or_default() += txn.amount;
        }

        let rows = by_pair
            .into_iter()
            .map(|((year, category), total)| YearlyCategoryRow {
                year,
                category,
                total,
            })
            .collect();

        Self { rows }
    }

    /// Check whether the breakdown is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the breakdown as a terminal table
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<6} {:<20} {:>14}\n",
            "Year", "Category", "Amount"
        ));
        output.push_str(&"-".repeat(42));
        output.push('\n');

        let mut last_year = None;
        for row in &self.rows {
            let year_label = if last_year == Some(row.year) {
                String::new()
            } else {
                row.year.to_string()
            };
            last_year = Some(row.year);

            output.push_str(&format!(
                "{:<6} {:<20} {:>14}\n",
                year_label,
                row.category,
                row.total.to_string()
            ));
        }

        output
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        writeln!(writer, "Year,Category,Amount")
            .map_err(|e| FinsightError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2}",
                row.year,
                row.category,
                row.total.cents() as f64 / 100.0
            )
            .map_err(|e| FinsightError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
