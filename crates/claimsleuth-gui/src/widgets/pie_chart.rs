/// Pie chart widget — painter-drawn, since egui_plot has no pie type.
///
/// Slices start at 3 o'clock and run counter-clockwise. Each slice gets an
/// outer name label and an inner percentage label (`12.3%`). Hovering a
/// slice highlights it and shows its name, value and share.
use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

/// One slice of the pie.
pub struct PieSlice<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: Color32,
}

/// Angular step between arc points, in radians (~3°).
const ARC_STEP: f32 = 0.05;

/// Slices thinner than this share (percent) get no inner label.
const MIN_LABELLED_PERCENT: f64 = 3.0;

/// Draw a pie chart filling a square of side `size`.
pub fn pie_chart(ui: &mut Ui, slices: &[PieSlice<'_>], size: f32) {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let gap_color = ui.visuals().panel_fill;

    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No data",
            FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let center = rect.center();
    // Leave a margin for the outer labels.
    let radius = size * 0.32;

    // Cumulative angle boundaries: slice i spans bounds[i]..bounds[i + 1].
    let mut bounds = Vec::with_capacity(slices.len() + 1);
    let mut acc = 0.0f32;
    bounds.push(acc);
    for s in slices {
        acc += (s.value.max(0.0) / total) as f32 * TAU;
        bounds.push(acc);
    }

    let hovered = response
        .hover_pos()
        .and_then(|pos| slice_at(pos, center, radius, &bounds));

    for (i, slice) in slices.iter().enumerate() {
        let (start, end) = (bounds[i], bounds[i + 1]);
        if end - start <= f32::EPSILON {
            continue;
        }
        let r = if hovered == Some(i) { radius * 1.05 } else { radius };
        fill_wedge(&painter, center, r, start, end, slice.color);
    }

    // Separator lines between slices.
    if slices.len() > 1 {
        for &angle in &bounds[..bounds.len() - 1] {
            painter.line_segment(
                [center, point_at(center, radius * 1.05, angle)],
                Stroke::new(1.5, gap_color),
            );
        }
    }

    for (i, slice) in slices.iter().enumerate() {
        let (start, end) = (bounds[i], bounds[i + 1]);
        if end - start <= f32::EPSILON {
            continue;
        }
        let mid = (start + end) * 0.5;
        let percent = slice.value.max(0.0) / total * 100.0;

        let outer = point_at(center, radius * 1.12, mid);
        let align = if mid.cos() >= 0.0 {
            Align2::LEFT_CENTER
        } else {
            Align2::RIGHT_CENTER
        };
        painter.text(outer, align, slice.label, FontId::proportional(11.0), text_color);

        if percent >= MIN_LABELLED_PERCENT {
            painter.text(
                point_at(center, radius * 0.6, mid),
                Align2::CENTER_CENTER,
                format!("{percent:.1}%"),
                FontId::proportional(11.0),
                Color32::from_rgb(0x1e, 0x1e, 0x2e),
            );
        }
    }

    if let Some(i) = hovered {
        let slice = &slices[i];
        let percent = slice.value.max(0.0) / total * 100.0;
        response.on_hover_text(format!(
            "{}: {} ({percent:.1}%)",
            slice.label, slice.value
        ));
    }
}

/// Screen position at `angle` (radians, counter-clockwise from +X).
fn point_at(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::new(angle.cos(), -angle.sin()) * radius
}

/// Fill one wedge as a series of convex sub-wedges of at most 90°.
fn fill_wedge(painter: &egui::Painter, center: Pos2, radius: f32, start: f32, end: f32, color: Color32) {
    let mut a = start;
    while a < end {
        let b = (a + FRAC_PI_2).min(end);
        let steps = ((b - a) / ARC_STEP).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for k in 0..=steps {
            let t = a + (b - a) * k as f32 / steps as f32;
            points.push(point_at(center, radius, t));
        }
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        a = b;
    }
}

/// Which slice (if any) lies under `pos`.
fn slice_at(pos: Pos2, center: Pos2, radius: f32, bounds: &[f32]) -> Option<usize> {
    let d = pos - center;
    if d.length() > radius {
        return None;
    }
    let angle = (-d.y).atan2(d.x).rem_euclid(TAU);
    bounds
        .windows(2)
        .position(|w| angle >= w[0] && angle < w[1])
}
