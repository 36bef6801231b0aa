use crate::app::App;

mod app;
mod components;
mod logging;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init(level);
    yew::Renderer::<App>::new().render();
}
