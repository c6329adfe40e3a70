//! GUI entry point for Weight Station

mod app;
mod entries_panel;
mod entry_panel;

use app::WeightStationApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Weight Station",
        options,
        Box::new(|cc| Ok(Box::new(WeightStationApp::new(cc)))),
    )
}
