/// Native file dialogs (via `rfd`) and the user actions built on them.
///
/// These are kept out of `AppState` so the state machine can be driven in
/// tests without a display.
use crate::state::AppState;
use claimsleuth_core::report::REPORT_FILE_NAME;
use claimsleuth_core::Dashboard;
use std::path::PathBuf;
use tracing::warn;

/// Ask the user for a CSV file.
pub fn pick_csv() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose a CSV file")
        .add_filter("CSV files", &["csv"])
        .pick_file()
}

/// Ask the user where to save the report, defaulting to the fixed name.
pub fn pick_report_destination() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save summary report")
        .set_file_name(REPORT_FILE_NAME)
        .add_filter("Text files", &["txt"])
        .save_file()
}

/// "Open CSV" — pick a file and load it. Cancelling changes nothing.
pub fn open_csv(state: &mut AppState) {
    if let Some(path) = pick_csv() {
        state.open_path(path);
    }
}

/// "Save report" — write the already generated report to a chosen file.
pub fn save_generated_report(state: &mut AppState) {
    if let Some(path) = pick_report_destination() {
        if let Err(e) = state.save_report(&path) {
            warn!("Report not saved: {e}");
        }
    }
}

/// Generate a fresh report from `dashboard` and immediately offer to save it.
pub fn export_report(state: &mut AppState, dashboard: &Dashboard) {
    state.generate_report(dashboard, chrono::Local::now().naive_local());
    save_generated_report(state);
}
