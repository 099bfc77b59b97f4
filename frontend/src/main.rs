use frontend::{config, App};
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting {} under base path {}", shared::constants::APP_NAME, config::base_path());

    Renderer::<App>::new().render();
}
