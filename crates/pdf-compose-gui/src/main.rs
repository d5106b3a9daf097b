#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod logger;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(200);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 400.0])
            .with_title("Image to PDF Converter"),
        ..Default::default()
    };

    eframe::run_native(
        "Image to PDF Converter",
        options,
        Box::new(move |cc| Ok(Box::new(app::ComposeApp::new(cc, logger)))),
    )
}
