/// ClaimSleuth Core — claim loading, aggregation, and report text.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — The in-memory claim table and display formatting helpers.
/// - [`loader`] — CSV ingestion with column presence and field checks.
/// - [`analysis`] — Grouped counts, modal values, sums and averages.
/// - [`tips`] — Static prevention tips keyed by error type.
/// - [`report`] — Plain-text summary report builder and writer.
/// - [`error`] — Typed load and export errors.
pub mod analysis;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod tips;

pub use analysis::Dashboard;
pub use error::{ExportError, LoadError};
pub use model::ClaimTable;
