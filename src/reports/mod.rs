//! Reports module for finsight
//!
//! The aggregation core: every report is a pure function of an immutable
//! transaction slice, recomputed in full on each invocation. Each report
//! type follows the same shape: `generate` to compute, `format_terminal`
//! for display, `export_csv` for machine-readable output.

pub mod category;
pub mod dashboard;
pub mod monthly;
pub mod summary;
pub mod yearly;

pub use category::{CategoryReport, CategoryRow};
pub use dashboard::Dashboard;
pub use monthly::{MonthlyReport, MonthlyRow};
pub use summary::SummaryReport;
pub use yearly::{YearlyCategoryReport, YearlyCategoryRow, YearlyReport, YearlyRow};
