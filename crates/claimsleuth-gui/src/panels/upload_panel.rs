/// Upload panel — file picker and file info in the left sidebar.
use crate::dialogs;
use crate::state::AppState;
use crate::theme::ClaimSleuthTheme;
use claimsleuth_core::analysis::unique_officers;
use claimsleuth_core::model::format::format_count;
use egui::{RichText, Ui};

/// Draw the upload panel (left sidebar content).
pub fn upload_panel(ui: &mut Ui, state: &mut AppState, theme: &ClaimSleuthTheme) {
    let color_muted = theme.text_muted;
    let color_success = theme.success;
    let color_error = theme.error;

    ui.heading("📁 Upload Data");
    ui.add_space(4.0);

    if ui
        .add(egui::Button::new("Choose a CSV file").min_size(egui::vec2(ui.available_width(), 28.0)))
        .clicked()
    {
        dialogs::open_csv(state);
    }
    ui.label(
        RichText::new("…or drop a .csv file onto the window")
            .size(11.0)
            .color(color_muted)
            .italics(),
    );

    ui.add_space(8.0);

    if let Some(ref file) = state.file {
        ui.label(
            RichText::new(format!("✅ Loaded {} claims", format_count(file.table.len() as u64)))
                .color(color_success),
        );

        ui.add_space(8.0);
        ui.label(RichText::new("File Info").strong().size(14.0));
        ui.add_space(2.0);

        egui::Grid::new("file_info_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("File:").color(color_muted));
                ui.label(&file.name).on_hover_text(file.source());
                ui.end_row();

                ui.label(RichText::new("Columns:").color(color_muted));
                ui.label(file.table.column_count().to_string());
                ui.end_row();

                ui.label(RichText::new("Rows:").color(color_muted));
                ui.label(format_count(file.table.len() as u64));
                ui.end_row();

                ui.label(RichText::new("Officers:").color(color_muted));
                ui.label(unique_officers(&file.table).to_string());
                ui.end_row();
            });
    } else if let Some(ref err) = state.load_error {
        ui.label(RichText::new("Could not load file").strong().color(color_error));
        ui.label(RichText::new(err).size(12.0).color(color_error));
    } else {
        ui.label(RichText::new("👆 Please upload a CSV file to begin").color(color_muted));
    }
}
