//! Monthly income/expense series
//!
//! Groups transactions by calendar month and pivots the income/expense
//! classification into two columns, filling months that only saw one kind
//! with a zero for the other. Rows come out in ascending month order.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Money, Transaction};

/// One month of the series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRow {
    /// Month identifier ("YYYY-MM")
    pub month: String,
    /// Income total for the month (zero if none)
    pub income: Money,
    /// Expense total for the month (zero if none)
    pub expense: Money,
    /// Income minus expenses for the month
    pub net: Money,
}

/// Monthly income, expense and net balance series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    /// One row per month present in the input, ascending by month
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyReport {
    /// Compute the series.
    ///
    /// Covers exactly the months present in the input; a month with only
    /// income or only expenses still gets a row, with the missing side at
    /// zero. Empty input yields an empty series.
    pub fn generate(transactions: &[Transaction]) -> Self {
        // BTreeMap keeps month keys in lexicographic order, which for
        // "YYYY-MM" strings is chronological order.
        let mut by_month: BTreeMap<String, (Money, Money)> = BTreeMap::new();

        for txn in transactions {
            let entry = by_month
                .entry(txn.month_key())
                .or_insert((Money::zero(), Money::zero()));
            if txn.is_income() {
                entry.0 += txn.amount;
            } else {
                entry.1 += txn.amount;
            }
        }

        let rows = by_month
            .into_iter()
            .map(|(month, (income, expense))| MonthlyRow {
                month,
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
            "{:<10} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expense", "Net"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14}\n",
                row.month,
                row.income.to_string(),
                row.expense.to_string(),
                row.net.to_string()
            ));
        }

        output
    }

    /// Export the series to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        writeln!(writer, "Month,Income,Expense,Net")
            .map_err(|e| FinsightError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                row.month,
                row.income.cents() as f64 / 100.0,
                row.expense.cents() as f64 / 100.0,
                row.net.cents() as f64 / 100.0
            )
            .map_err(|e| FinsightError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
