mod chart;
mod components;
mod config;
mod deck;
mod error;
mod logging;
mod model;
mod util;

fn main() {
    logging::init();
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    yew::Renderer::<components::app::App>::new().render();
}
