mod app;
mod config;
mod filter;
mod image;
mod util;

use app::FilterApp;
use config::AppConfig;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let initial_image_path: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Image Processing and Filtering")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "filterdesk",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(FilterApp::new(
                config,
                initial_image_path.as_deref(),
            )))
        }),
    )
}
