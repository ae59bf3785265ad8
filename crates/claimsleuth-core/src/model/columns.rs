/// Recognised CSV column names. Matching is case-sensitive.

/// Staff identifier that processed the claim. Required.
pub const OFFICER: &str = "Officer";
/// Categorical error label. Required.
pub const ERROR_TYPE: &str = "Error_Type";
/// Amount paid on the claim. Optional, numeric.
pub const PAYMENT_AMOUNT: &str = "Payment_Amount";
/// Country where treatment took place. Optional.
pub const COUNTRY_OF_TREATMENT: &str = "Country_of_Treatment";
/// Invoice date. Optional, date-parseable.
pub const DATE_OF_INVOICE: &str = "Date_of_Invoice";

/// Columns that must be present for a file to load.
pub const REQUIRED: [&str; 2] = [OFFICER, ERROR_TYPE];
