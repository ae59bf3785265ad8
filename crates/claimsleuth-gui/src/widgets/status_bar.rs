/// Bottom status bar — page phase, loaded file, and last export.
use crate::state::{AppPhase, AppState};
use crate::theme::ClaimSleuthTheme;
use claimsleuth_core::model::format::format_count;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &ClaimSleuthTheme) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_error = theme.error;
    let color_success = theme.success;

    ui.horizontal(|ui| {
        match (state.phase, &state.file) {
            (AppPhase::NoFile, _) | (_, None) => {
                if state.load_error.is_some() {
                    ui.label(
                        egui::RichText::new("✖ Load failed")
                            .size(12.0)
                            .color(color_error),
                    );
                } else {
                    ui.label(
                        egui::RichText::new("Waiting for a CSV file")
                            .size(12.0)
                            .color(color_weak),
                    );
                }
            }
            (_, Some(file)) => {
                ui.label(
                    egui::RichText::new("✓ Loaded")
                        .size(12.0)
                        .color(color_success),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(&file.name)
                        .size(12.0)
                        .color(color_normal),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{} claims",
                        format_count(file.table.len() as u64)
                    ))
                    .size(12.0)
                    .color(color_accent),
                );
            }
        }

        if let Some(ref export) = state.last_export {
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "Report saved {} → {}",
                    export.generated_at.format("%H:%M"),
                    export.path.display()
                ))
                .size(12.0)
                .color(color_weak),
            );
        }
    });
}
