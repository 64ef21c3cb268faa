use dioxus::prelude::*;

use crate::routes::Route;

/// Landing point for the OAuth redirect.
///
/// The backend completes the code exchange and persists the session and the
/// role flag before redirecting here; this page only forwards the user home.
#[component]
pub fn OAuthRedirect(code: Option<String>) -> Element {
    let received = code.is_some();

    use_effect(move || {
        if received {
            tracing::info!("oauth redirect received an authorization code");
        } else {
            tracing::warn!("oauth redirect reached without a code parameter");
        }
        navigator().replace(Route::Main {});
    });

    rsx! {
        div { class: "redirect-page",
            p { "Signing you in..." }
        }
    }
}
