use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod composer;
mod config;
mod content;
mod icons;
mod lifecycle;
mod navigation;
mod overlay;
mod reveal;
mod subscription;
mod components {
    pub mod dev_popup;
    pub mod nav;
    pub mod schedule_form;
    pub mod service_modal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            // Single page site, unknown paths land on the same content
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
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

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
