//! ClaimSleuth — claim quality error analysis dashboard.
//!
//! Thin binary entry point. All logic lives in the `claimsleuth-core`
//! and `claimsleuth-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("ClaimSleuth starting");

    let icon = claimsleuth_gui::icon::generate_icon(64);
    let state = claimsleuth_gui::AppState::new();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("ClaimSleuth -- Claim Quality Dashboard")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_icon(icon)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "ClaimSleuth",
        options,
        Box::new(|cc| {
            Ok(Box::new(claimsleuth_gui::ClaimSleuthApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
