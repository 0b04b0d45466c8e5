use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod audio;
mod carousel;
mod date_picker;
mod observers;
mod reservation;
mod scroll_sync;
mod styles;

mod components {
    pub mod audio_player;
    pub mod card_stack;
    pub mod confirm_modal;
    pub mod date_picker_modal;
    pub mod fade_in;
    pub mod footer;
    pub mod header;
    pub mod reserve_button;
    pub mod tab_bar;
}
mod sections {
    pub mod common;
    pub mod letters;
    pub mod memorial;
    pub mod my_hall;
    pub mod reserve;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing");
            html! { <Redirect<Route> to={Route::Landing} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    styles::install_global_style();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
