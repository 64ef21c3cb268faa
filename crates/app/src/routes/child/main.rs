use api::StoreApi;
use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle, Skeleton,
};

use crate::routes::Route;

/// Fixed search point until device geolocation is wired into this page.
const DEFAULT_LAT: f64 = 36.3553;
const DEFAULT_LON: f64 = 127.2986;

/// Child main page — stores within walking distance.
#[component]
pub fn ChildMain() -> Element {
    let api = use_context::<StoreApi>();

    let mut stores = use_resource(move || {
        let api = api.clone();
        async move {
            api.nearby_stores(DEFAULT_LAT, DEFAULT_LON)
                .await
                .inspect_err(|err| tracing::error!("failed to load nearby stores: {err}"))
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "Stores near you" }
        }
        match &*stores.read() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state", p { "No participating stores nearby yet." } }
                    }
                }
            },
            Some(Ok(list)) => rsx! {
                div { class: "store-grid",
                    for store in list.iter().cloned() {
                        Link {
                            key: "{store.store_id}",
                            to: Route::ChildStoreDetail { store_id: Some(store.store_id) },
                            Card {
                                CardHeader {
                                    CardTitle { "{store.store_name}" }
                                    if let Some(address) = store.store_address {
                                        CardDescription { "{address}" }
                                    }
                                }
                                CardContent {
                                    if let Some(open) = store.store_open_time {
                                        p { class: "store-open-time", "Open {open}" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state",
                            h2 { "Could not load stores" }
                            p { "{err.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| stores.restart(),
                                "Retry"
                            }
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            },
        }
    }
}
