use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;
use crate::session::use_session;

/// Landing page with role-aware entry points.
#[component]
pub fn Main() -> Element {
    let session = use_session();
    let role = (session.role)();

    rsx! {
        div { class: "hero",
            h1 { "MealPass" }
            p { "Meal support that connects children, sponsors, and neighborhood stores." }
        }
        div { class: "entry-grid",
            match role {
                Role::Child => rsx! {
                    EntryCard {
                        to: Route::ChildMain {},
                        title: "Find a store",
                        description: "Browse stores near you and check today's menu.",
                    }
                    EntryCard {
                        to: Route::ChildUser {},
                        title: "My page",
                        description: "Your profile and remaining meal balance.",
                    }
                },
                Role::Owner => rsx! {
                    EntryCard {
                        to: Route::OwnerStoreList {},
                        title: "My stores",
                        description: "Manage menus and bookings for your stores.",
                    }
                    EntryCard {
                        to: Route::OwnerRegister {},
                        title: "Register a store",
                        description: "Claim a store and start sharing meals.",
                    }
                },
                _ => rsx! {
                    EntryCard {
                        to: Route::Login {},
                        title: "Sign in",
                        description: "Log in to see stores and bookings for your account.",
                    }
                },
            }
        }
    }
}

#[component]
fn EntryCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to,
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
                CardContent {}
            }
        }
    }
}
