//! Terminal display helpers
//!
//! Formatting utilities shared by the report renderers: bar charts,
//! percentages, section headers and the transaction preview table.

pub mod report;
pub mod transaction;

pub use report::{format_bar, format_percentage, section_header};
pub use transaction::preview_table;
