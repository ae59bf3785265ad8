//! ClaimSleuth application icon generator.
//!
//! Produces a procedural icon: a claim form (rounded sheet) carrying a
//! small bar chart, with a red error badge in the top-right corner. The
//! icon is rendered at an arbitrary resolution as RGBA pixel data suitable
//! for use as a window icon.

/// Generate a ClaimSleuth icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // Sheet, inset so the badge can overhang the corner.
    let sheet = (s * 0.12, s * 0.16, s * 0.78, s * 0.92);
    let sheet_radius = s * 0.08;

    // Bars: (left, right, top) as fractions of the icon; bottoms share a baseline.
    let baseline = s * 0.80;
    let bars: &[(f32, f32, f32, [u8; 3])] = &[
        (0.22, 0.34, 0.56, [0x89, 0xb4, 0xfa]),
        (0.40, 0.52, 0.42, [0xa6, 0xe3, 0xa1]),
        (0.58, 0.70, 0.64, [0xf9, 0xe2, 0xaf]),
    ];

    // Error badge.
    let badge_cx = s * 0.76;
    let badge_cy = s * 0.22;
    let badge_r = s * 0.17;

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut rgb = [0u8; 3];
            let mut alpha = 0.0f32;

            // Sheet.
            let sheet_cov = rounded_rect_coverage(px, py, sheet, sheet_radius);
            if sheet_cov > 0.0 {
                rgb = [0xe4, 0xe4, 0xe8];
                alpha = sheet_cov;
            }

            // Bars.
            for &(l, r, t, col) in bars {
                let cov = rect_coverage(px, py, (s * l, s * t, s * r, baseline));
                if cov > 0.0 {
                    rgb = blend(rgb, col, cov);
                }
            }

            // Badge with a white "!" mark.
            let d = ((px - badge_cx).powi(2) + (py - badge_cy).powi(2)).sqrt();
            let badge_cov = smooth_edge(d, badge_r);
            if badge_cov > 0.0 {
                rgb = blend(rgb, [0xf3, 0x5b, 0x6b], badge_cov);
                alpha = alpha + (1.0 - alpha) * badge_cov;

                let mark_w = badge_r * 0.16;
                let stem = rect_coverage(
                    px,
                    py,
                    (
                        badge_cx - mark_w,
                        badge_cy - badge_r * 0.55,
                        badge_cx + mark_w,
                        badge_cy + badge_r * 0.15,
                    ),
                );
                let dot_d = ((px - badge_cx).powi(2) + (py - (badge_cy + badge_r * 0.45)).powi(2)).sqrt();
                let dot = smooth_edge(dot_d, mark_w * 1.2);
                let mark = stem.max(dot) * badge_cov;
                rgb = blend(rgb, [0xff, 0xff, 0xff], mark);
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = rgb[0];
            pixels[idx + 1] = rgb[1];
            pixels[idx + 2] = rgb[2];
            pixels[idx + 3] = (alpha * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

/// Anti-aliased coverage of a disc edge: 1 inside, 0 outside, linear ramp
/// across one pixel either side.
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    (0.5 - (dist - edge) * 0.5).clamp(0.0, 1.0)
}

/// Coverage of an axis-aligned rectangle `(left, top, right, bottom)`.
fn rect_coverage(px: f32, py: f32, (l, t, r, b): (f32, f32, f32, f32)) -> f32 {
    let cx = (px - l + 0.5).min(r - px + 0.5).clamp(0.0, 1.0);
    let cy = (py - t + 0.5).min(b - py + 0.5).clamp(0.0, 1.0);
    cx * cy
}

/// Coverage of a rounded rectangle with corner radius `radius`.
fn rounded_rect_coverage(px: f32, py: f32, (l, t, r, b): (f32, f32, f32, f32), radius: f32) -> f32 {
    let qx = (px - (l + r) * 0.5).abs() - ((r - l) * 0.5 - radius);
    let qy = (py - (t + b) * 0.5).abs() - ((b - t) * 0.5 - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let dist = outside + qx.max(qy).min(0.0);
    smooth_edge(dist, radius)
}

fn blend(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 * (1.0 - t) + y as f32 * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_has_rgba_per_pixel() {
        let px = render_icon(32);
        assert_eq!(px.len(), 32 * 32 * 4);
    }

    #[test]
    fn corners_are_transparent_and_centre_is_opaque() {
        let size = 64u32;
        let px = render_icon(size);
        let alpha_at = |x: u32, y: u32| px[((y * size + x) * 4 + 3) as usize];
        assert_eq!(alpha_at(0, size - 1), 0);
        assert_eq!(alpha_at(size / 2, size / 2 + 10), 255);
    }

    #[test]
    fn icon_data_dimensions() {
        let icon = generate_icon(48);
        assert_eq!(icon.width, 48);
        assert_eq!(icon.height, 48);
        assert_eq!(icon.rgba.len(), 48 * 48 * 4);
    }
}
