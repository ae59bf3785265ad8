/// "Quick Stats" — headline numbers in a two-column grid.
use crate::widgets::metric::metric;
use claimsleuth_core::model::format::format_count;
use claimsleuth_core::Dashboard;
use egui::Ui;

pub fn stats_panel(ui: &mut Ui, dashboard: &Dashboard) {
    let stats = &dashboard.stats;

    ui.heading("📊 Quick Stats");
    ui.add_space(4.0);

    ui.columns(2, |cols| {
        metric(&mut cols[0], "Total Claims", format_count(stats.total_claims as u64));
        metric(&mut cols[0], "Unique Officers", format_count(stats.unique_officers as u64));

        metric(&mut cols[1], "Error Types", format_count(stats.unique_error_types as u64));
        if let Some(range) = stats.date_range {
            metric(&mut cols[1], "Date Range", range.to_string());
        }
    });
}
