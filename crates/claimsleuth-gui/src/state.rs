/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. The only
/// data held across frames is the loaded claim table; every aggregate is
/// recomputed from it by [`AppState::current_dashboard`] when a frame is
/// drawn.
///
/// Page lifecycle: `NoFile -> Loaded -> Rendered`. A new upload goes back
/// to `Loaded`; a failed upload goes back to `NoFile`. Exporting a report
/// is a side branch that leaves the phase untouched.
use crate::theme::ThemeMode;
use chrono::NaiveDateTime;
use claimsleuth_core::report::{build_report, write_report};
use claimsleuth_core::{loader, ClaimTable, Dashboard, ExportError, LoadError};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// The current phase of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// No file loaded — only the upload prompt is shown.
    NoFile,
    /// A file was just loaded and has not been drawn yet.
    Loaded,
    /// The dashboard has been drawn for the current file.
    Rendered,
}

/// The currently loaded CSV file.
#[derive(Debug)]
pub struct LoadedFile {
    /// Display name (file name without directories).
    pub name: String,
    /// Source path, when the file came from disk rather than raw bytes.
    pub path: Option<PathBuf>,
    pub table: ClaimTable,
}

impl LoadedFile {
    /// Where the table came from: the full path, or a note that the bytes
    /// were dropped without one.
    pub fn source(&self) -> String {
        match self.path {
            Some(ref path) => path.display().to_string(),
            None => format!("{} (dropped, no path)", self.name),
        }
    }
}

/// A report generated by the user, ready to be saved.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub text: String,
    pub generated_at: NaiveDateTime,
}

/// Record of the most recent successful save.
#[derive(Debug, Clone)]
pub struct ReportExport {
    pub path: PathBuf,
    pub generated_at: NaiveDateTime,
}

/// All application state.
pub struct AppState {
    // ── Data ───────────────────────────────────────────
    pub phase: AppPhase,
    pub file: Option<LoadedFile>,
    /// Message from the last failed load, shown in the sidebar.
    pub load_error: Option<String>,

    // ── Report ─────────────────────────────────────────
    pub report: Option<GeneratedReport>,
    pub last_export: Option<ReportExport>,
    pub export_error: Option<String>,

    // ── UI state ───────────────────────────────────────
    pub theme_mode: ThemeMode,
    pub show_about: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state (no file loaded).
    pub fn new() -> Self {
        Self {
            phase: AppPhase::NoFile,
            file: None,
            load_error: None,
            report: None,
            last_export: None,
            export_error: None,
            theme_mode: ThemeMode::Dark,
            show_about: false,
        }
    }

    /// Load a CSV file from disk, replacing any previous file.
    ///
    /// Returns `true` on success. On failure the previous table is
    /// discarded and the error is kept for display.
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let result = loader::load_path(&path);
        self.accept(name, Some(path), result)
    }

    /// Load a CSV payload that arrived without a path (drag-and-drop on
    /// platforms that only hand over bytes).
    pub fn open_bytes(&mut self, name: String, bytes: &[u8]) -> bool {
        let result = loader::load_bytes(bytes);
        self.accept(name, None, result)
    }

    fn accept(
        &mut self,
        name: String,
        path: Option<PathBuf>,
        result: Result<ClaimTable, LoadError>,
    ) -> bool {
        // Any upload starts a fresh interaction: stale reports go.
        self.report = None;
        self.export_error = None;

        match result {
            Ok(table) => {
                info!("Opened {name}: {} claims", table.len());
                self.file = Some(LoadedFile { name, path, table });
                self.load_error = None;
                self.phase = AppPhase::Loaded;
                true
            }
            Err(e) => {
                error!("Failed to load {name}: {e}");
                self.file = None;
                self.load_error = Some(format!("{name}: {e}"));
                self.phase = AppPhase::NoFile;
                false
            }
        }
    }

    /// The loaded table, if any.
    pub fn table(&self) -> Option<&ClaimTable> {
        self.file.as_ref().map(|f| &f.table)
    }

    /// Recompute every aggregate for the loaded table.
    pub fn current_dashboard(&self) -> Option<Dashboard> {
        self.table().map(Dashboard::compute)
    }

    /// Record that the dashboard has been drawn for the current file.
    pub fn mark_rendered(&mut self) {
        if self.phase == AppPhase::Loaded {
            self.phase = AppPhase::Rendered;
        }
    }

    /// Build a fresh report from `dashboard` and keep it for saving.
    pub fn generate_report(&mut self, dashboard: &Dashboard, now: NaiveDateTime) -> &str {
        let text = build_report(dashboard, now);
        info!("Generated summary report ({} bytes)", text.len());
        self.export_error = None;
        let report = self.report.insert(GeneratedReport {
            text,
            generated_at: now,
        });
        &report.text
    }

    /// Write the last generated report to `path`.
    pub fn save_report(&mut self, path: &Path) -> Result<(), ExportError> {
        let report = self.report.as_ref().ok_or(ExportError::NothingToExport)?;
        match write_report(path, &report.text) {
            Ok(()) => {
                self.last_export = Some(ReportExport {
                    path: path.to_path_buf(),
                    generated_at: report.generated_at,
                });
                self.export_error = None;
                Ok(())
            }
            Err(e) => {
                error!("{e}");
                self.export_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Switch between dark and light themes.
    pub fn toggle_theme(&mut self) {
        self.theme_mode.toggle();
    }
}
