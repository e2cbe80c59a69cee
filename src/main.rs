//! Sandbox entry point.

use save_editor::app::App;
use save_editor::config::EditorConfig;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("MAIN: Booting save editor sandbox...");

    let config_path = PathBuf::from("editor.toml");
    let config = EditorConfig::load(&config_path);
    if !config_path.exists()
        && let Err(e) = config.save(&config_path)
    {
        log::warn!("MAIN: could not write default config: {}", e);
    }

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("MAIN: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run() {
        log::error!("MAIN: event loop failed: {}", e);
        std::process::exit(1);
    }
}
