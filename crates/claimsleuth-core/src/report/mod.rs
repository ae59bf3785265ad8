/// Summary report — plain-text export of the dashboard.
///
/// The builder is pure: the caller supplies the generation timestamp, so
/// two exports of the same table differ only in the `Generated:` line.
pub mod builder;
pub mod writer;

pub use builder::{build_report, REPORT_TOP_OFFICERS};
pub use writer::write_report;

/// Default file name offered in the save dialog.
pub const REPORT_FILE_NAME: &str = "claim_quality_report.txt";

/// MIME type of the exported report.
pub const REPORT_MIME: &str = "text/plain";
