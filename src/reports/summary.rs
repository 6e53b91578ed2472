//! Headline summary
//!
//! Total income, total expenses and net balance for a transaction set.

use serde::Serialize;
use std::io::Write;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Money, Transaction};

/// Headline totals for the selected period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expense: Money,
    /// Income minus expenses
    pub net: Money,
    /// Number of transactions in the set
    pub transaction_count: usize,
}

impl SummaryReport {
    /// Compute the totals.
    ///
    /// An empty set yields all-zero totals; this never fails.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let expense: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Self {
            income,
            expense,
            net: income - expense,
            transaction_count: transactions.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{:<16} {:>14}\n", "Total Income", self.income.to_string()));
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Total Expenses",
            self.expense.to_string()
        ));
        output.push_str(&format!("{:<16} {:>14}\n", "Net Balance", self.net.to_string()));

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        writeln!(writer, "Income,Expense,Net,Transactions")
            .map_err(|e| FinsightError::Export(e.to_string()))?;
        writeln!(
            writer,
            "{:.2},{:.2},{:.2},{}",
            self.income.cents() as f64 / 100.0,
            self.expense.cents() as f64 / 100.0,
            self.net.cents() as f64 / 100.0,
            self.transaction_count
        )
        .map_err(|e| FinsightError::Export(e.to_string()))?;

        Ok(())
    }
}
