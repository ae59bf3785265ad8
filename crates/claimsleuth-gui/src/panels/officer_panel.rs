/// "Errors by Officer" — distribution pie chart and performance table.
use crate::theme::ClaimSleuthTheme;
use crate::widgets::count_table::ROW_HEIGHT;
use crate::widgets::pie_chart::{pie_chart, PieSlice};
use claimsleuth_core::model::format::{format_count, format_percent};
use claimsleuth_core::Dashboard;
use egui::Ui;
use egui_extras::{Column, TableBuilder};

/// Side length of the pie chart.
const PIE_SIZE: f32 = 320.0;

pub fn officer_panel(ui: &mut Ui, dashboard: &Dashboard, theme: &ClaimSleuthTheme) {
    ui.heading("👥 Errors by Officer");
    ui.add_space(4.0);

    ui.label(egui::RichText::new("Error Distribution by Officer").strong());
    let slices: Vec<PieSlice<'_>> = dashboard
        .officers
        .iter()
        .enumerate()
        .map(|(i, o)| PieSlice {
            label: o.officer.as_str(),
            value: o.errors as f64,
            color: theme.slice_color(i),
        })
        .collect();
    let size = PIE_SIZE.min(ui.available_width());
    ui.vertical_centered(|ui| {
        pie_chart(ui, &slices, size);
    });

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Officer Performance:").strong());
    ui.add_space(2.0);

    ui.push_id("officer_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::remainder().at_least(120.0))
            .max_scroll_height(260.0)
            .header(ROW_HEIGHT, |mut header| {
                for h in ["Officer", "Errors", "% Total", "Most Common Error"] {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, dashboard.officers.len(), |mut row| {
                    let o = &dashboard.officers[row.index()];
                    row.col(|ui| {
                        ui.label(o.officer.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format_count(o.errors));
                    });
                    row.col(|ui| {
                        ui.label(format_percent(o.percent));
                    });
                    row.col(|ui| {
                        ui.label(o.most_common_error.as_str());
                    });
                });
            });
    });
}
