use api::StoreApi;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Login page.
///
/// Sign-in is delegated entirely to the backend's OAuth endpoints; this page
/// only links out. The backend redirects back to `/login/oauth` and persists
/// the session and role flag.
#[component]
pub fn Login() -> Element {
    let api = use_context::<StoreApi>();
    let kakao_url = format!("{}/oauth2/authorization/kakao", api.base_url());
    let google_url = format!("{}/oauth2/authorization/google", api.base_url());

    rsx! {
        div { class: "login-page",
            Card {
                CardHeader {
                    CardTitle { "Sign in to MealPass" }
                    CardDescription { "Continue with one of the providers below." }
                }
                CardContent {
                    div { class: "login-providers",
                        a { class: "button", "data-style": "primary", href: "{kakao_url}",
                            "Continue with Kakao"
                        }
                        a { class: "button", "data-style": "secondary", href: "{google_url}",
                            "Continue with Google"
                        }
                    }
                }
            }
        }
    }
}
