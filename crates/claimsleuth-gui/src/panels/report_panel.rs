/// "Generate Reports" — build the summary report, preview it, save it.
use crate::dialogs;
use crate::state::AppState;
use crate::theme::ClaimSleuthTheme;
use claimsleuth_core::report::REPORT_FILE_NAME;
use claimsleuth_core::Dashboard;
use egui::{RichText, Ui};

pub fn report_panel(
    ui: &mut Ui,
    state: &mut AppState,
    dashboard: &Dashboard,
    theme: &ClaimSleuthTheme,
) {
    let color_muted = theme.text_muted;
    let color_error = theme.error;
    let color_success = theme.success;

    ui.heading("📄 Generate Reports");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new(RichText::new("📥 Download Summary Report").strong()))
            .clicked()
        {
            state.generate_report(dashboard, chrono::Local::now().naive_local());
        }

        if state.report.is_some()
            && ui
                .button("⬇ Download Report (.txt)")
                .on_hover_text(format!("Save as {REPORT_FILE_NAME}"))
                .clicked()
        {
            dialogs::save_generated_report(state);
        }
    });

    if let Some(ref err) = state.export_error {
        ui.label(RichText::new(err).size(12.0).color(color_error));
    } else if let Some(ref export) = state.last_export {
        ui.label(
            RichText::new(format!("Saved to {}", export.path.display()))
                .size(12.0)
                .color(color_success),
        );
    }

    if let Some(ref report) = state.report {
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!(
                "Preview (generated {})",
                report.generated_at.format("%Y-%m-%d %H:%M")
            ))
            .size(11.0)
            .color(color_muted),
        );
        let mut text = report.text.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .desired_rows(10),
        );
    }
}
