mod app;
mod components;
mod config;
mod containers;
mod events;
mod logging;
mod models;
mod storage;
mod surface;

use config::SiteConfig;

fn main() {
    logging::install_panic_hook();

    let config = SiteConfig::new();
    logging::init(&config.log_level);
    tracing::info!("Starting Ecosite client");

    if let Err(err) = app::run(config) {
        tracing::error!(error = %storage::describe(&err), "Ecosite client failed to start");
    }
}
