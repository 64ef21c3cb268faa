use api::StoreApi;
use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableCell,
    DataTableRow, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::routes::Route;

/// Owner store management list — every store registered to this owner.
#[component]
pub fn OwnerStoreList() -> Element {
    let api = use_context::<StoreApi>();

    let mut stores = use_resource(move || {
        let api = api.clone();
        async move {
            api.owner_stores()
                .await
                .inspect_err(|err| tracing::error!("failed to load owner stores: {err}"))
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "My stores" }
            PageActions {
                Link { to: Route::OwnerRegister {},
                    Button { "Register a store" }
                }
            }
        }
        match &*stores.read() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state",
                            p { "You have no registered stores yet." }
                            Link { to: Route::OwnerRegister {},
                                Button { variant: ButtonVariant::Secondary, "Register one" }
                            }
                        }
                    }
                }
            },
            Some(Ok(list)) => rsx! {
                DataTable { columns: vec!["Store", "Address", "Hours", ""],
                    for store in list.iter().cloned() {
                        DataTableRow {
                            key: "{store.store_id}",
                            onclick: move |_| {
                                navigator().push(Route::OwnerStore { store_id: store.store_id });
                            },
                            DataTableCell { "{store.store_name}" }
                            DataTableCell {
                                {store.store_address.clone().unwrap_or_else(|| "--".to_string())}
                            }
                            DataTableCell {
                                {store.store_open_time.clone().unwrap_or_else(|| "--".to_string())}
                            }
                            DataTableCell {
                                if store.store_always_share {
                                    Badge { variant: BadgeVariant::Outline, "Always sharing" }
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
                            h2 { "Could not load your stores" }
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
