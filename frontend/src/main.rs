use std::rc::Rc;

use log::{debug, error, info};
use yew::prelude::*;

mod config;
mod content;
mod page;
mod reveal;
mod theme;
mod visibility;
mod components {
    pub mod icon;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use theme::system::{document_preference, system_prefers_dark, SystemThemeWatch};
use theme::Palette;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub palette: Rc<Palette>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let preference = *use_state(document_preference);
    let mode = use_state(|| preference.resolve(system_prefers_dark()));

    {
        let mode = mode.clone();
        use_effect_with_deps(
            move |follows_system| {
                let watch = if *follows_system {
                    SystemThemeWatch::start(move |next| mode.set(next))
                } else {
                    None
                };
                move || drop(watch)
            },
            preference.follows_system(),
        );
    }

    let today = chrono::Local::now().date_naive();
    debug!("Rendering landing page in {} mode", *mode);

    html! {
        <Landing palette={props.palette.clone()} mode={*mode} today={today} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let palette = match Palette::standard() {
        Ok(palette) => Rc::new(palette),
        Err(err) => {
            error!("Theme palette is misconfigured: {}", err);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { palette }).render();
}
