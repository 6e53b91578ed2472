//! finsight - Terminal-based personal finance dashboard
//!
//! This library provides the core functionality for the finsight dashboard:
//! it loads a CSV of financial transactions (date, income/expense type,
//! category, amount) and derives the summary tables shown by the CLI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, the year filter)
//! - `import`: CSV loading
//! - `reports`: The aggregation layer; pure functions over the loaded set
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use finsight::models::{Money, Transaction, TransactionKind, YearFilter};
//! use finsight::reports::Dashboard;
//!
//! let transactions = vec![Transaction::new(
//!     chrono::NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
//!     TransactionKind::Income,
//!     "Salary",
//!     Money::from_cents(100_000),
//! )];
//! let dashboard = Dashboard::generate(&transactions, YearFilter::All);
//! assert_eq!(dashboard.totals.income, Money::from_cents(100_000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod models;
pub mod reports;

pub use error::{FinsightError, FinsightResult};
