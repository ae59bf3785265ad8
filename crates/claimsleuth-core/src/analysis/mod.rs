/// Analysis modules — aggregation over a loaded claim table.
///
/// Every function here is a pure function of the table. The GUI calls
/// [`Dashboard::compute`] on each render instead of holding derived state.
pub mod counts;
pub mod country;
pub mod dashboard;
pub mod dates;
pub mod error_types;
pub mod financial;
pub mod officers;
pub mod stats;

pub use counts::{value_counts, ValueCount};
pub use country::count_by_country;
pub use dashboard::Dashboard;
pub use dates::{date_range, DateRange};
pub use error_types::{count_by_error_type, unique_error_types, TOP_ERROR_TYPES};
pub use financial::{financial_impact, payment_mean, payment_total, FinancialImpact};
pub use officers::{
    count_by_officer, modal_error_type, officer_summaries, percent_of_total, unique_officers,
    OfficerSummary,
};
pub use stats::{quick_stats, QuickStats};
