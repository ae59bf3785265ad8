/// CSV ingestion — turns an uploaded file into a [`ClaimTable`].
///
/// The header row is checked for the required columns before any data row
/// is read. Each row is then deserialised with serde; optional fields that
/// are present get parsed (amounts as `f64`, invoice dates as calendar
/// dates). The first bad row aborts the load: a partial table is never
/// returned.
use crate::error::LoadError;
use crate::model::{columns, ClaimRecord, ClaimTable};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use compact_str::CompactString;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One CSV row as it comes off the reader, before field parsing.
///
/// Unrecognised columns are ignored by serde. Optional columns that are
/// missing from the header, or empty in this row, deserialise as `None`.
#[derive(Debug, Deserialize)]
struct RawClaim {
    #[serde(rename = "Officer")]
    officer: String,
    #[serde(rename = "Error_Type")]
    error_type: String,
    #[serde(rename = "Payment_Amount", default)]
    payment_amount: Option<String>,
    #[serde(rename = "Country_of_Treatment", default)]
    country: Option<String>,
    #[serde(rename = "Date_of_Invoice", default)]
    invoice_date: Option<String>,
}

/// Date-only layouts accepted for `Date_of_Invoice`, tried in order.
///
/// Month-first wins for slash dates; day-first is only tried when the
/// first field cannot be a month (`15/01/2024`).
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%Y%m%d",
];

/// Date-time layouts accepted for `Date_of_Invoice`; only the date is kept.
/// `%.f` also matches a missing fractional part.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Load a claim table from a file on disk.
pub fn load_path(path: &Path) -> Result<ClaimTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_reader(file)?;
    info!(
        "Loaded {} claims ({} columns) from {}",
        table.len(),
        table.column_count(),
        path.display()
    );
    Ok(table)
}

/// Load a claim table from an in-memory CSV payload (e.g. a dropped file).
pub fn load_bytes(bytes: &[u8]) -> Result<ClaimTable, LoadError> {
    load_reader(bytes)
}

/// Load a claim table from any CSV byte stream.
pub fn load_reader<R: Read>(reader: R) -> Result<ClaimTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut table = ClaimTable::new(headers);
    for (i, row) in rdr.deserialize::<RawClaim>().enumerate() {
        let raw = row?;
        table.push(parse_record(raw, i + 1)?);
    }

    debug!(
        rows = table.len(),
        payment = table.has_payment_amount,
        country = table.has_country,
        invoice_date = table.has_invoice_date,
        "claim table parsed"
    );
    Ok(table)
}

/// Convert a raw row into a typed record. `row` is the 1-based data row.
fn parse_record(raw: RawClaim, row: usize) -> Result<ClaimRecord, LoadError> {
    let payment_amount = match non_blank(raw.payment_amount) {
        Some(text) => Some(parse_amount(&text).ok_or(LoadError::InvalidNumber {
            row,
            column: columns::PAYMENT_AMOUNT,
            value: text,
        })?),
        None => None,
    };

    let invoice_date = match non_blank(raw.invoice_date) {
        Some(text) => Some(parse_invoice_date(&text).ok_or(LoadError::InvalidDate {
            row,
            column: columns::DATE_OF_INVOICE,
            value: text,
        })?),
        None => None,
    };

    Ok(ClaimRecord {
        officer: CompactString::from(raw.officer),
        error_type: CompactString::from(raw.error_type),
        payment_amount,
        country: non_blank(raw.country).map(CompactString::from),
        invoice_date,
    })
}

/// Treat whitespace-only cells the same as empty ones.
fn non_blank(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.trim().is_empty())
}

/// Parse a payment amount. Non-finite values (`NaN`, `inf`) are rejected.
fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an invoice date in any of the accepted layouts.
pub fn parse_invoice_date(text: &str) -> Option<NaiveDate> {
    let s = text.trim();
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
