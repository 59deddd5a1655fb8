use log::info;
use yew::prelude::*;

mod booking;
mod config;
mod content;
mod error;
mod navigation;
mod scroll;
mod theme;
mod components {
    pub mod book;
    pub mod footer;
    pub mod header;
    pub mod icons;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::header::Header;
use navigation::{BrowserAnchors, MenuState, Section};
use pages::landing::Landing;
use theme::use_theme;

#[function_component]
fn App() -> Html {
    let theme = use_theme();
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let navigate = {
        let menu = menu.clone();
        Callback::from(move |section: Section| {
            let mut next = *menu;
            navigation::scroll_to_section(&BrowserAnchors, &mut next, section.anchor());
            menu.set(next);
        })
    };

    html! {
        <>
            <Header
                theme={theme.theme}
                on_toggle_theme={theme.toggle.clone()}
                menu={*menu}
                on_toggle_menu={toggle_menu}
                on_navigate={navigate.clone()}
            />
            <Landing on_navigate={navigate} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
