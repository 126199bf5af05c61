//! Bullseye desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Bullseye application.

use bullseye_app::app::BullseyeApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "bullseye";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((420.0, 560.0))
            .with_min_inner_size((320.0, 420.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Bullseye",
        options,
        Box::new(|cc| Ok(Box::new(BullseyeApp::new(cc)))),
    )
}
