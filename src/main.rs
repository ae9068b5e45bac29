use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod intersection;
mod gallery {
    pub mod state;
    pub mod input;
    pub mod effects;
    pub mod lazy;
    pub mod lightbox;
}
mod components {
    pub mod nav;
    pub mod scroll;
    pub mod fade_in;
    pub mod contact_form;
    pub mod a11y;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::{
    a11y::use_first_tab_focus,
    nav::Nav,
    scroll::{use_smooth_anchor_scroll, ScrollToTop},
};
use pages::{home::Home, not_found::NotFound};


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
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    use_smooth_anchor_scroll();
    use_first_tab_focus();

    use_effect_with_deps(
        move |_| {
            info!("Musik-Café website initialized successfully");
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <ScrollToTop />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
