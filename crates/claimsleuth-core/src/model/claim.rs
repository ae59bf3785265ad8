/// The in-memory claim table.
///
/// Records are stored in file order. Optional columns are tracked by
/// presence flags so that a column that exists but has empty cells is
/// distinguishable from a column that was never in the file.
use super::columns;
use chrono::NaiveDate;
use compact_str::CompactString;

/// A single claim row.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRecord {
    pub officer: CompactString,
    pub error_type: CompactString,
    /// `None` when the column is absent or the cell is empty.
    pub payment_amount: Option<f64>,
    pub country: Option<CompactString>,
    pub invoice_date: Option<NaiveDate>,
}

impl ClaimRecord {
    /// A record with only the required fields set.
    pub fn new(officer: impl Into<CompactString>, error_type: impl Into<CompactString>) -> Self {
        Self {
            officer: officer.into(),
            error_type: error_type.into(),
            payment_amount: None,
            country: None,
            invoice_date: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<CompactString>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_invoice_date(mut self, date: NaiveDate) -> Self {
        self.invoice_date = Some(date);
        self
    }
}

/// Ordered collection of claim records loaded from one file.
#[derive(Debug, Clone, Default)]
pub struct ClaimTable {
    /// Header row exactly as it appeared in the file.
    pub headers: Vec<String>,
    pub records: Vec<ClaimRecord>,
    pub has_payment_amount: bool,
    pub has_country: bool,
    pub has_invoice_date: bool,
}

impl ClaimTable {
    /// Create an empty table for the given header row.
    ///
    /// Optional-column flags are derived from the headers.
    pub fn new(headers: Vec<String>) -> Self {
        let has = |name: &str| headers.iter().any(|h| h == name);
        let has_payment_amount = has(columns::PAYMENT_AMOUNT);
        let has_country = has(columns::COUNTRY_OF_TREATMENT);
        let has_invoice_date = has(columns::DATE_OF_INVOICE);
        Self {
            headers,
            records: Vec::new(),
            has_payment_amount,
            has_country,
            has_invoice_date,
        }
    }

    pub fn push(&mut self, record: ClaimRecord) {
        self.records.push(record);
    }

    /// Number of claims (data rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of columns in the header row, recognised or not.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClaimRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ClaimTable {
    type Item = &'a ClaimRecord;
    type IntoIter = std::slice::Iter<'a, ClaimRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
