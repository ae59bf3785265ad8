/// "Top Error Types" — ranked bar chart and prevention tips.
use crate::theme::ClaimSleuthTheme;
use crate::widgets::bar_chart::ranked_bar_chart;
use claimsleuth_core::Dashboard;
use egui::{RichText, Ui};

const CHART_HEIGHT: f32 = 300.0;

pub fn error_type_panel(ui: &mut Ui, dashboard: &Dashboard, theme: &ClaimSleuthTheme) {
    ui.heading("🚨 Top Error Types");
    ui.add_space(4.0);

    ui.label(RichText::new("Most Frequent Error Types").strong());
    ranked_bar_chart(
        ui,
        "error_type_chart",
        &dashboard.error_types,
        theme.error_bar,
        CHART_HEIGHT,
    );

    ui.add_space(8.0);
    ui.heading("💡 Prevention Tips");
    ui.add_space(4.0);

    if dashboard.tips.is_empty() {
        ui.label(
            RichText::new("No tips for the current top error types.")
                .color(ui.visuals().weak_text_color())
                .italics(),
        );
        return;
    }

    for tip in &dashboard.tips {
        egui::Frame::group(ui.style())
            .fill(theme.surface)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(format!("{}:", tip.error_type))
                            .strong()
                            .color(theme.info),
                    );
                    ui.label(tip.tip);
                });
            });
        ui.add_space(2.0);
    }
}
