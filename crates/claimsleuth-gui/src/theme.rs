/// Colour scheme and visual theme for ClaimSleuth.
///
/// Provides both dark and light themes. All colour constants are defined
/// here so the rest of the UI code references semantically-named values
/// rather than raw hex codes.
use egui::{Color32, Stroke, Visuals};

/// Which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Toggle between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Pie slice colours, cycled when there are more officers than entries.
const SLICE_COLORS: [Color32; 10] = [
    Color32::from_rgb(0x89, 0xb4, 0xfa),
    Color32::from_rgb(0xfa, 0xb3, 0x87),
    Color32::from_rgb(0xa6, 0xe3, 0xa1),
    Color32::from_rgb(0xf3, 0x8b, 0xa8),
    Color32::from_rgb(0xcb, 0xa6, 0xf7),
    Color32::from_rgb(0xf9, 0xe2, 0xaf),
    Color32::from_rgb(0x94, 0xe2, 0xd5),
    Color32::from_rgb(0xf5, 0xc2, 0xe7),
    Color32::from_rgb(0x74, 0xc7, 0xec),
    Color32::from_rgb(0xb4, 0xbe, 0xfe),
];

/// Semantic colour palette for ClaimSleuth.
pub struct ClaimSleuthTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub success: Color32,
    pub info: Color32,
    /// Fill for the error-type bar chart.
    pub error_bar: Color32,
    pub separator: Color32,
    pub selection: Color32,
}

impl ClaimSleuthTheme {
    /// Dark theme — the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            surface_hover: Color32::from_rgb(0x35, 0x35, 0x4a),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_secondary: Color32::from_rgb(0xb8, 0xb8, 0xc4),
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            info: Color32::from_rgb(0x74, 0xc7, 0xec),
            error_bar: Color32::from_rgb(0xff, 0x6b, 0x6b),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
            selection: Color32::from_rgb(0x28, 0x3a, 0x5c),
        }
    }

    /// Light theme — optional toggle.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe8, 0xe8, 0xef),
            text_primary: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_secondary: Color32::from_rgb(0x4a, 0x4a, 0x5a),
            text_muted: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            info: Color32::from_rgb(0x20, 0x80, 0xb0),
            error_bar: Color32::from_rgb(0xe8, 0x4a, 0x4a),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
            selection: Color32::from_rgba_premultiplied(0x3a, 0x6f, 0xd8, 0x30),
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Colour of the `i`-th pie slice.
    pub fn slice_color(&self, i: usize) -> Color32 {
        SLICE_COLORS[i % SLICE_COLORS.len()]
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.separator);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.weak_bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.weak_bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let mut mode = ThemeMode::Dark;
        mode.toggle();
        assert_eq!(mode, ThemeMode::Light);
        mode.toggle();
        assert!(mode.is_dark());
    }

    /// Panels take their status colours from the palette, so each mode
    /// must keep error and success visually apart.
    #[test]
    fn status_colours_are_distinct() {
        for theme in [ClaimSleuthTheme::dark(), ClaimSleuthTheme::light()] {
            assert_ne!(theme.error, theme.success);
            assert_ne!(theme.text_muted, theme.text_primary);
        }
        assert_ne!(ClaimSleuthTheme::dark().error, ClaimSleuthTheme::light().error);
    }

    #[test]
    fn slice_colours_cycle() {
        let theme = ClaimSleuthTheme::dark();
        assert_eq!(theme.slice_color(0), theme.slice_color(SLICE_COLORS.len()));
        assert_ne!(theme.slice_color(0), theme.slice_color(1));
    }
}
