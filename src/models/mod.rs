//! Core data models for finsight
//!
//! This module contains the data structures that represent the dashboard
//! domain: transactions, money amounts, and the year filter.

pub mod filter;
pub mod money;
pub mod transaction;

pub use filter::{years_present, YearFilter};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
