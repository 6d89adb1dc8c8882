//! Application entry point wiring logging and egui/eframe to launch the registration form.

use crate::config::AppConfig;
use crate::ui::RegistrationApp;
use crate::utils::init_logging;
use eframe::egui;
use egui_phosphor::Variant;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    let config = AppConfig::default();

    if let Err(err) = init_logging(&config.default_log_filter) {
        eprintln!("{err:#}");
    }
    tracing::info!(title = %config.title, "starting registration form");

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let app = RegistrationApp::new(&config);
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
