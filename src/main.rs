use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod hooks;
mod indicator;
mod placement;
mod scroll;
mod pages {
    pub mod landing;
}
mod components {
    pub mod card;
    pub mod icons;
    pub mod progress_ring;
}

use config::LandingConfig;
use content::CardDeck;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub deck: Rc<CardDeck>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let config = LandingConfig::default();

    html! {
        <Landing deck={props.deck.clone()} config={config} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let deck = match CardDeck::embedded() {
        Ok(deck) => {
            info!("Loaded {} cards", deck.len());
            deck
        }
        Err(e) => {
            error!("Failed to load cards, rendering without them: {}", e);
            CardDeck::default()
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { deck: Rc::new(deck) }).render();
}
