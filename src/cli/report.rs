//! Handlers for the single-report commands
//!
//! `summary`, `monthly` and `categories` honor the year filter; `yearly`
//! always runs over the full file, and `years` lists the years available
//! for filtering.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{FinsightError, FinsightResult};
use crate::models::{years_present, YearFilter};
use crate::reports::{
    CategoryReport, MonthlyReport, SummaryReport, YearlyCategoryReport, YearlyReport,
};

use super::{create_export_writer, load_for_command};

/// Handle the `summary` command
pub fn handle_summary(
    file: &Path,
    year: Option<i32>,
    output: Option<PathBuf>,
    json: bool,
    settings: &Settings,
) -> FinsightResult<()> {
    let transactions = load_for_command(file, settings)?;
    let filter = YearFilter::from_arg(year);
    let report = SummaryReport::generate(&filter.apply(&transactions));

    if let Some(path) = output {
        let mut writer = create_export_writer(&path)?;
        report.export_csv(&mut writer)?;
        println!("Summary exported to: {}", path.display());
    } else if json {
        println!("{}", to_json(&report)?);
    } else {
        println!("Summary for {}\n", filter);
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the `monthly` command
pub fn handle_monthly(
    file: &Path,
    year: Option<i32>,
    output: Option<PathBuf>,
    json: bool,
    settings: &Settings,
) -> FinsightResult<()> {
    let transactions = load_for_command(file, settings)?;
    let filter = YearFilter::from_arg(year);
    let report = MonthlyReport::generate(&filter.apply(&transactions));

    if let Some(path) = output {
        let mut writer = create_export_writer(&path)?;
        report.export_csv(&mut writer)?;
        println!("Monthly report exported to: {}", path.display());
    } else if json {
        println!("{}", to_json(&report)?);
    } else {
        println!("Monthly Income and Expenses - {}\n", filter);
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the `categories` command
pub fn handle_categories(
    file: &Path,
    year: Option<i32>,
    top: Option<usize>,
    output: Option<PathBuf>,
    json: bool,
    settings: &Settings,
) -> FinsightResult<()> {
    let transactions = load_for_command(file, settings)?;
    let filter = YearFilter::from_arg(year);
    let report = CategoryReport::generate(&filter.apply(&transactions));

    if let Some(path) = output {
        let mut writer = create_export_writer(&path)?;
        report.export_csv(&mut writer)?;
        println!("Category report exported to: {}", path.display());
    } else if json {
        println!("{}", to_json(&report)?);
    } else if let Some(n) = top {
        println!("Top {} Spending Categories - {}\n", n, filter);
        for row in report.top_categories(n) {
            println!(
                "{:<20} {:>12} {:>6.1}%",
                row.category,
                row.total.to_string(),
                row.percentage
            );
        }
        println!("\nTotal Expenses: {}", report.total_expense);
    } else {
        println!("Expenses by Category - {}\n", filter);
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the `yearly` command (always unfiltered)
pub fn handle_yearly(
    file: &Path,
    by_category: bool,
    output: Option<PathBuf>,
    json: bool,
    settings: &Settings,
) -> FinsightResult<()> {
    let transactions = load_for_command(file, settings)?;

    if by_category {
        let report = YearlyCategoryReport::generate(&transactions);
        if let Some(path) = output {
            let mut writer = create_export_writer(&path)?;
            report.export_csv(&mut writer)?;
            println!("Yearly category report exported to: {}", path.display());
        } else if json {
            println!("{}", to_json(&report)?);
        } else {
            println!("Yearly Expenses by Category\n");
            println!("{}", report.format_terminal());
        }
    } else {
        let report = YearlyReport::generate(&transactions);
        if let Some(path) = output {
            let mut writer = create_export_writer(&path)?;
            report.export_csv(&mut writer)?;
            println!("Yearly report exported to: {}", path.display());
        } else if json {
            println!("{}", to_json(&report)?);
        } else {
            println!("Yearly Income, Expenses and Net\n");
            println!("{}", report.format_terminal());
        }
    }

    Ok(())
}

/// Handle the `years` command
pub fn handle_years(file: &Path, settings: &Settings) -> FinsightResult<()> {
    let transactions = load_for_command(file, settings)?;
    let years = years_present(&transactions);

    if years.is_empty() {
        println!("No transactions loaded.");
    } else {
        for year in years {
            println!("{}", year);
        }
    }

    Ok(())
}

/// Serialize a report as pretty JSON
fn to_json<T: serde::Serialize>(report: &T) -> FinsightResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| FinsightError::Export(format!("Could not serialize report: {}", e)))
}
