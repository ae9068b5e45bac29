use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Seite nicht gefunden"}</h1>
            <p>{"Diese Seite gibt es leider nicht."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Zur Startseite"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
