/// "Financial Impact" and "Errors by Country".
///
/// Each section is drawn only when its source column was in the file.
use crate::widgets::count_table::count_table;
use crate::widgets::metric::metric;
use claimsleuth_core::model::format::format_currency;
use claimsleuth_core::Dashboard;
use egui::Ui;

pub fn financial_panel(ui: &mut Ui, dashboard: &Dashboard) {
    ui.heading("💰 Financial Impact");
    ui.add_space(4.0);

    if let Some(impact) = dashboard.financial {
        metric(ui, "Total Payments at Risk", format_currency(impact.total));
        let average = impact
            .average
            .map(format_currency)
            .unwrap_or_else(|| "n/a".to_string());
        metric(ui, "Average per Claim", average);
    }

    ui.add_space(8.0);
    ui.heading("🌎 Errors by Country");
    ui.add_space(4.0);

    if let Some(ref countries) = dashboard.countries {
        count_table(ui, "country_table", ["Country_of_Treatment", "Count"], countries);
    }
}
