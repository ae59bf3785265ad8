/// Metric widget — a small caption above a large value.
use egui::{RichText, Ui};

/// Draw a labelled headline value.
pub fn metric(ui: &mut Ui, label: &str, value: impl Into<String>) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(label)
                .size(12.0)
                .color(ui.visuals().weak_text_color()),
        );
        ui.label(
            RichText::new(value.into())
                .size(22.0)
                .strong()
                .color(ui.visuals().strong_text_color()),
        );
    });
    ui.add_space(6.0);
}
