use yew::prelude::*;

mod components;
mod config;
mod content;
mod gallery;
mod pages;
mod theme;

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Starting {} landing page", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
