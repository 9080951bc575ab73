use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod synergy_layout;
mod animation {
    pub mod particles;
    pub mod reveal;
    pub mod scheduler;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod layout;
    pub mod loader;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod home;
    pub mod insights;
    pub mod portfolio;
    pub mod synergy_map;
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
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
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
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
