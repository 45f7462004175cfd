//! Todo Web Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod http;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = context::load_config();
    logging::init(config.log_level);
    log::info!("[APP] starting, API at {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
