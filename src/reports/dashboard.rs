//! Combined dashboard data
//!
//! Assembles all five derived views from one transaction set and one year
//! filter. The filter restricts the headline totals, the monthly series and
//! the category breakdown; the yearly views are always computed over the
//! full set.

use serde::Serialize;

use crate::models::{Transaction, YearFilter};

use super::{
    CategoryReport, MonthlyReport, SummaryReport, YearlyCategoryReport, YearlyReport,
};

/// All derived views for one (transaction set, filter) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Headline income/expense/net totals for the filtered set
    pub totals: SummaryReport,
    /// Monthly income/expense/net series for the filtered set
    pub monthly_summary: MonthlyReport,
    /// Expense breakdown by category for the filtered set
    pub category_summary: CategoryReport,
    /// Yearly income/expense/net series over the full set
    pub yearly_summary: YearlyReport,
    /// Per-year category expense totals over the full set
    pub yearly_category_summary: YearlyCategoryReport,
}

impl Dashboard {
    /// Compute every view. Pure function of the inputs: identical inputs
    /// always produce identical output, and the input set is never mutated.
    pub fn generate(transactions: &[Transaction], filter: YearFilter) -> Self {
        let filtered = filter.apply(transactions);

        Self {
            totals: SummaryReport::generate(&filtered),
            monthly_summary: MonthlyReport::generate(&filtered),
            category_summary: CategoryReport::generate(&filtered),
            yearly_summary: YearlyReport::generate(transactions),
            yearly_category_summary: YearlyCategoryReport::generate(transactions),
        }
    }
}
