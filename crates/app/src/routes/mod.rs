pub mod child;
pub mod login;
pub mod main_page;
pub mod not_found;
pub mod oauth_redirect;
pub mod owner;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdHeart, LdStore, LdUser, LdUtensils};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Navbar, NavbarBrand, NavbarLinks};

use crate::session::use_session;

use child::main::ChildMain;
use child::store_detail::ChildStoreDetail;
use child::user::ChildUser;
use login::Login;
use main_page::Main;
use not_found::NotFound;
use oauth_redirect::OAuthRedirect;
use owner::booking::OwnerBooking;
use owner::manage::OwnerStoreList;
use owner::register::OwnerRegister;
use owner::store::OwnerStore;

/// Application routes.
///
/// Every path parameter is declared and typed here, so pages receive parsed
/// values instead of raw path strings. Unmatched paths land on `NotFound`.
/// No role check gates any route — a wrong-role visitor simply gets empty or
/// failed fetches from the backend.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/login/oauth?:code")]
    OAuthRedirect { code: Option<String> },
    #[layout(Shell)]
    #[route("/")]
    Main {},
    // ── Child pages ──
    #[route("/chmain")]
    ChildMain {},
    #[route("/chstore?:store_id")]
    ChildStoreDetail { store_id: Option<i64> },
    #[route("/chuser")]
    ChildUser {},
    // ── Owner pages ──
    #[route("/owstore/:store_id")]
    OwnerStore { store_id: i64 },
    #[route("/owstore/:store_id/booking")]
    OwnerBooking { store_id: i64 },
    #[route("/owstorelist")]
    OwnerStoreList {},
    #[route("/owregister")]
    OwnerRegister {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shared layout: top navbar with role-adapted links above the routed page.
#[component]
fn Shell() -> Element {
    let session = use_session();
    let role = (session.role)();

    rsx! {
        Navbar {
            NavbarBrand {
                Link { to: Route::Main {}, "MealPass" }
            }
            NavbarLinks {
                match role {
                    Role::Child => rsx! {
                        Link { to: Route::ChildMain {},
                            Icon::<LdStore> { icon: LdStore, width: 16, height: 16 }
                            "Stores"
                        }
                        Link { to: Route::ChildUser {},
                            Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                            "My Page"
                        }
                    },
                    Role::Owner => rsx! {
                        Link { to: Route::OwnerStoreList {},
                            Icon::<LdUtensils> { icon: LdUtensils, width: 16, height: 16 }
                            "My Stores"
                        }
                        Link { to: Route::OwnerRegister {},
                            Icon::<LdStore> { icon: LdStore, width: 16, height: 16 }
                            "Register a Store"
                        }
                    },
                    _ => rsx! {
                        Link { to: Route::Login {},
                            Icon::<LdHeart> { icon: LdHeart, width: 16, height: 16 }
                            "Login"
                        }
                    },
                }
            }
        }
        main { class: "page-content",
            Outlet::<Route> {}
        }
    }
}
