/// Horizontal bar chart for ranked counts, built on `egui_plot`.
///
/// The highest-ranked entry is drawn at the top. Category names are shown
/// as y-axis labels, which keeps long error-type labels readable without
/// rotated text.
use claimsleuth_core::analysis::ValueCount;
use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

/// Draw `entries` (already sorted, highest first) as horizontal bars.
pub fn ranked_bar_chart(ui: &mut Ui, id: &str, entries: &[ValueCount], color: Color32, height: f32) {
    let n = entries.len();
    let labels: Vec<String> = entries.iter().map(|e| e.value.to_string()).collect();

    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            Bar::new(row_position(i, n), e.count as f64)
                .name(e.value.as_str())
                .width(0.7)
                .fill(color)
        })
        .collect();

    let chart = BarChart::new(bars).horizontal().color(color).name("Count");

    Plot::new(id)
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([true, false])
        .include_x(0.0)
        .include_y(0.0)
        .include_y(n as f64 + 1.0)
        .x_axis_label("Count")
        .y_axis_formatter(move |mark, _range| label_for(mark.value, &labels))
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

/// Y position of rank `i` out of `n`: rank 0 sits at the top.
fn row_position(i: usize, n: usize) -> f64 {
    (n - i) as f64
}

/// Axis label for a grid mark: only whole-number rows carry a name.
fn label_for(value: f64, labels: &[String]) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 1.0 {
        return String::new();
    }
    let n = labels.len();
    let row = rounded as usize;
    if row > n {
        return String::new();
    }
    labels[n - row].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["First".into(), "Second".into(), "Third".into()]
    }

    #[test]
    fn top_rank_is_highest_row() {
        assert_eq!(row_position(0, 3), 3.0);
        assert_eq!(row_position(2, 3), 1.0);
    }

    #[test]
    fn labels_match_rows() {
        let l = labels();
        assert_eq!(label_for(3.0, &l), "First");
        assert_eq!(label_for(1.0, &l), "Third");
    }

    #[test]
    fn off_grid_marks_are_blank() {
        let l = labels();
        assert_eq!(label_for(2.5, &l), "");
        assert_eq!(label_for(0.0, &l), "");
        assert_eq!(label_for(4.0, &l), "");
    }
}
