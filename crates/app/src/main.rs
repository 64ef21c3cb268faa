use api::StoreApi;
use dioxus::prelude::*;

mod components;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The stored role flag is parsed into a typed Role exactly once here;
    // every page reads it through SessionState instead of localStorage.
    use_context_provider(SessionState::resolve);
    use_context_provider(StoreApi::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
