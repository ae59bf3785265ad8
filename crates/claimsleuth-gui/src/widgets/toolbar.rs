/// Top action bar -- open, export, theme toggle, and branding.
use crate::dialogs;
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🏥 ClaimSleuth")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        if ui
            .add(egui::Button::new("📂 Open CSV").min_size(egui::vec2(90.0, 28.0)))
            .on_hover_text("Load a claims CSV file")
            .clicked()
        {
            dialogs::open_csv(state);
        }

        let can_export = state.table().is_some();
        if ui
            .add_enabled(can_export, egui::Button::new("📤 Export Report"))
            .on_hover_text("Generate the summary report and save it as text")
            .on_disabled_hover_text("Load a CSV file first to enable export")
            .clicked()
        {
            if let Some(dashboard) = state.current_dashboard() {
                dialogs::export_report(state, &dashboard);
            }
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About ClaimSleuth").clicked() {
                state.show_about = true;
            }

            let dark = state.theme_mode.is_dark();
            let theme_label = if dark { "☀" } else { "🌙" };
            let theme_tip = if dark {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.toggle_theme();
            }
        });
    });
}
