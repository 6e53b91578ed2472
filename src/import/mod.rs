//! CSV import
//!
//! Loads a transaction CSV into memory. The input contract is a header row
//! containing at least `Date`, `Type`, `Category` and `Amount` columns
//! (case-insensitive, any column order). Rows that fail to parse are
//! collected as row-level errors rather than aborting the whole file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, StringRecord};

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Date formats tried after the configured primary format
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d",
];

/// Resolved indexes of the required columns
#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    date: usize,
    kind: usize,
    category: usize,
    amount: usize,
}

impl ColumnIndexes {
    /// Locate the required columns in the header row
    fn from_headers(headers: &StringRecord) -> FinsightResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let date = find("date")
            .ok_or_else(|| FinsightError::Import("Missing 'Date' column".into()))?;
        let kind = find("type")
            .ok_or_else(|| FinsightError::Import("Missing 'Type' column".into()))?;
        let category = find("category")
            .ok_or_else(|| FinsightError::Import("Missing 'Category' column".into()))?;
        let amount = find("amount")
            .ok_or_else(|| FinsightError::Import("Missing 'Amount' column".into()))?;

        Ok(Self {
            date,
            kind,
            category,
            amount,
        })
    }
}

/// An error in a single CSV row
#[derive(Debug, Clone)]
pub struct RowError {
    /// Row number in the file (1-indexed, excluding the header)
    pub row: usize,
    /// What went wrong
    pub message: String,
}

/// Outcome of loading a CSV file
#[derive(Debug, Clone, Default)]
pub struct LoadedTransactions {
    /// Successfully parsed rows, in file order
    pub transactions: Vec<Transaction>,
    /// Rows that could not be parsed
    pub errors: Vec<RowError>,
}

impl LoadedTransactions {
    /// Check whether any rows failed to parse
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Load transactions from a CSV file on disk
pub fn load_transactions(path: &Path, date_format: &str) -> FinsightResult<LoadedTransactions> {
    log::debug!("loading transactions from {}", path.display());

    let file = File::open(path).map_err(|e| {
        FinsightError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let loaded = read_transactions(file, date_format)?;

    log::debug!(
        "loaded {} transactions, {} row errors",
        loaded.transactions.len(),
        loaded.errors.len()
    );
    for err in &loaded.errors {
        log::warn!("row {}: {}", err.row, err.message);
    }

    Ok(loaded)
}

/// Read transactions from any CSV source
pub fn read_transactions<R: Read>(
    source: R,
    date_format: &str,
) -> FinsightResult<LoadedTransactions> {
    let mut reader = Reader::from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| FinsightError::Csv(format!("Could not read CSV header: {}", e)))?
        .clone();
    let columns = ColumnIndexes::from_headers(&headers)?;

    let mut loaded = LoadedTransactions::default();

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                loaded.errors.push(RowError {
                    row,
                    message: format!("Error reading CSV record: {}", e),
                });
                continue;
            }
        };

        match parse_record(&record, columns, date_format) {
            Ok(txn) => loaded.transactions.push(txn),
            Err(message) => loaded.errors.push(RowError { row, message }),
        }
    }

    Ok(loaded)
}

/// Parse a single CSV record into a transaction
fn parse_record(
    record: &StringRecord,
    columns: ColumnIndexes,
    date_format: &str,
) -> Result<Transaction, String> {
    let date_str = record
        .get(columns.date)
        .ok_or_else(|| "Missing date field".to_string())?
        .trim();
    let date = parse_date(date_str, date_format)?;

    let kind_str = record
        .get(columns.kind)
        .ok_or_else(|| "Missing type field".to_string())?;
    let kind = TransactionKind::parse(kind_str)?;

    let category = record
        .get(columns.category)
        .ok_or_else(|| "Missing category field".to_string())?
        .trim()
        .to_string();

    let amount_str = record
        .get(columns.amount)
        .ok_or_else(|| "Missing amount field".to_string())?
        .trim();
    let amount = Money::parse(amount_str)
        .map_err(|e| format!("Could not parse amount '{}': {}", amount_str, e))?;

    Ok(Transaction::new(date, kind, category, amount))
}

/// Parse a date string, trying the primary format then common fallbacks
fn parse_date(s: &str, primary_format: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Ok(date);
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    Err(format!("Could not parse date: '{}'", s))
}
