//! Handler for the `dashboard` command
//!
//! Renders the full dashboard: data preview, headline totals, monthly
//! series, category breakdown, and (when no year filter is set) the yearly
//! trend sections. With `--json` the five derived tables are printed as one
//! JSON object instead, keyed for downstream chart tooling.

use std::path::Path;

use crate::config::Settings;
use crate::display::{preview_table, section_header};
use crate::error::{FinsightError, FinsightResult};
use crate::models::YearFilter;
use crate::reports::Dashboard;

use super::load_for_command;

/// Handle the `dashboard` command
pub fn handle_dashboard(
    file: &Path,
    year: Option<i32>,
    json: bool,
    settings: &Settings,
) -> FinsightResult<()> {
    let transactions = load_for_command(file, settings)?;
    let filter = YearFilter::from_arg(year);
    let dashboard = Dashboard::generate(&transactions, filter);

    if json {
        let rendered = serde_json::to_string_pretty(&dashboard)
            .map_err(|e| FinsightError::Export(format!("Could not serialize dashboard: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", section_header("Personal Finance Dashboard"));

    if transactions.is_empty() {
        println!("No transactions loaded.");
        return Ok(());
    }

    println!(
        "First {} Rows of Loaded Data\n",
        settings.preview_rows.min(transactions.len())
    );
    println!("{}\n", preview_table(&transactions, settings.preview_rows));

    println!("{}", section_header(&format!("Summary for {}", filter)));
    println!("{}", dashboard.totals.format_terminal());

    println!("{}", section_header("Monthly Income and Expenses"));
    println!("{}", dashboard.monthly_summary.format_terminal());

    println!(
        "{}",
        section_header(&format!("Expenses by Category - {}", filter))
    );
    println!("{}", dashboard.category_summary.format_terminal());

    // Yearly sections only appear for the all-time view, matching the
    // original dashboard layout.
    if filter.is_all() {
        println!("{}", section_header("Yearly Trends"));
        println!("{}", dashboard.yearly_summary.format_terminal());

        println!("{}", section_header("Yearly Expenses by Category"));
        println!("{}", dashboard.yearly_category_summary.format_terminal());
    }

    Ok(())
}
