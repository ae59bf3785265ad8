/// Dashboard panels, one per section of the page.
pub mod error_type_panel;
pub mod financial_panel;
pub mod officer_panel;
pub mod report_panel;
pub mod stats_panel;
pub mod upload_panel;
