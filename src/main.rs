use log::{info, Level};
use yew::prelude::*;

mod components {
    pub mod navbar;
    pub mod pointer_demo;
    pub mod shuffler;
    pub mod typewriter;
}
mod config;
mod lead_form;
mod pages {
    pub mod landing;
}
mod sequencer {
    pub mod dom;
    pub mod ease;
    pub mod effect;
    pub mod progress;
    pub mod region;
    pub mod replay;
    pub mod shuffle;
    pub mod typewriter;
}

use crate::pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
