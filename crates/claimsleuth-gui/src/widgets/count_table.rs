/// Two-column value/count table built on `egui_extras::TableBuilder`.
use claimsleuth_core::analysis::ValueCount;
use claimsleuth_core::model::format::format_count;
use egui::Ui;
use egui_extras::{Column, TableBuilder};

/// Row height used by every table in the dashboard.
pub const ROW_HEIGHT: f32 = 20.0;

/// Draw a table of `(value, count)` rows under the given headers.
///
/// `id` keeps egui state (column widths, scroll) separate when more than
/// one table is on screen.
pub fn count_table(ui: &mut Ui, id: &str, headers: [&str; 2], rows: &[ValueCount]) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().at_least(120.0))
            .column(Column::auto().at_least(60.0))
            .max_scroll_height(240.0)
            .header(ROW_HEIGHT, |mut header| {
                for h in headers {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let entry = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(entry.value.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format_count(entry.count));
                    });
                });
            });
    });
}
