/// Main `eframe::App` implementation for ClaimSleuth.
///
/// This is the top-level UI layout that composes all panels and widgets.
/// Every frame recomputes the dashboard from the loaded table; egui only
/// repaints on input, so this happens once per user interaction.
use crate::panels;
use crate::state::AppState;
use crate::theme::ClaimSleuthTheme;
use crate::widgets;
use claimsleuth_core::Dashboard;
use tracing::warn;

/// The ClaimSleuth application.
pub struct ClaimSleuthApp {
    state: AppState,
}

impl ClaimSleuthApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        ClaimSleuthTheme::for_mode(state.theme_mode).apply(&cc.egui_ctx);
        Self { state }
    }

    /// Load the first file dropped onto the window, if any.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(path) = file.path {
            self.state.open_path(path);
        } else if let Some(bytes) = file.bytes {
            self.state.open_bytes(file.name, &bytes);
        } else {
            warn!("Dropped item '{}' has neither a path nor contents", file.name);
        }
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        let mut show_about = self.state.show_about;
        egui::Window::new("About ClaimSleuth")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🏥 ClaimSleuth")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Claim quality error analysis.\n\
                             Errors by officer, top error types,\n\
                             financial impact and a summary report.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("MIT License - Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;
    }
}

impl eframe::App for ClaimSleuthApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        let theme = ClaimSleuthTheme::for_mode(self.state.theme_mode);
        theme.apply(ctx);

        self.handle_dropped_files(ctx);

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        self.about_window(ctx);

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Left sidebar ──────────────────────────────────────────────────
        egui::SidePanel::left("upload_panel")
            .default_width(260.0)
            .min_width(200.0)
            .max_width(400.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::upload_panel::upload_panel(ui, &mut self.state, &theme);
                });
            });

        // ── Central dashboard ─────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new("🏥 CLAIM QUALITY ERROR ANALYSIS ENGINE")
                    .size(22.0)
                    .strong(),
            );
            ui.separator();

            // No file: the page stops at the prompt.
            let Some(dashboard) = self.state.current_dashboard() else {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("👆 Please upload a CSV file to begin")
                            .size(16.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                });
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    dashboard_body(ui, &mut self.state, &dashboard, &theme);
                });

            self.state.mark_rendered();
        });
    }
}

/// The dashboard sections, in fixed layout order.
fn dashboard_body(ui: &mut egui::Ui, state: &mut AppState, dashboard: &Dashboard, theme: &ClaimSleuthTheme) {
    ui.columns(2, |cols| {
        panels::officer_panel::officer_panel(&mut cols[0], dashboard, theme);
        panels::error_type_panel::error_type_panel(&mut cols[1], dashboard, theme);
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    ui.columns(2, |cols| {
        panels::financial_panel::financial_panel(&mut cols[0], dashboard);
        panels::stats_panel::stats_panel(&mut cols[1], dashboard);
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    panels::report_panel::report_panel(ui, state, dashboard, theme);

    ui.add_space(12.0);
    ui.label(
        egui::RichText::new(format!(
            "© Claim Quality Analysis Engine v{}",
            env!("CARGO_PKG_VERSION")
        ))
        .size(11.0)
        .color(ui.visuals().weak_text_color()),
    );
}
