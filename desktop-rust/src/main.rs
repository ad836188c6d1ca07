mod app;
mod io;
mod model;

use app::DesktopApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match io::load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config load failed, using defaults: {err:#}");
            Default::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Food Analyzer",
        options,
        Box::new(move |_cc| Box::new(DesktopApp::new(config))),
    )
}
