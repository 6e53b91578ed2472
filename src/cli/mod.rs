//! CLI command handlers
//!
//! Each subcommand loads the transaction CSV, applies the year filter where
//! it applies, and renders the requested report to the terminal, a CSV file,
//! or JSON.

pub mod dashboard;
pub mod report;

pub use dashboard::handle_dashboard;
pub use report::{
    handle_categories, handle_monthly, handle_summary, handle_yearly, handle_years,
};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{FinsightError, FinsightResult};
use crate::import;
use crate::models::Transaction;

/// Load a transaction CSV for a command, reporting skipped rows on stderr
pub(crate) fn load_for_command(
    file: &Path,
    settings: &Settings,
) -> FinsightResult<Vec<Transaction>> {
    let loaded = import::load_transactions(file, &settings.date_format)?;

    if loaded.has_errors() {
        eprintln!(
            "Warning: skipped {} row(s) that could not be parsed:",
            loaded.errors.len()
        );
        for err in &loaded.errors {
            eprintln!("  row {}: {}", err.row, err.message);
        }
    }

    Ok(loaded.transactions)
}

/// Create a buffered writer for a CSV export target
pub(crate) fn create_export_writer(path: &PathBuf) -> FinsightResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinsightError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
