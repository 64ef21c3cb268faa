use api::StoreApi;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHeart;
use dioxus_free_icons::Icon;
use shared_types::{ChildMenuItem, MenuItem, StoreMenus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableCell,
    DataTableRow, Skeleton,
};

use crate::session::use_session;

/// Role-conditional store menu view.
///
/// Fetches the role-selected variant of the store detail resource whenever
/// the store id changes and renders exactly one of the two list variants.
/// Restarting the resource on an id change drops the in-flight request, so a
/// response for a superseded id can never overwrite newer state.
#[component]
pub fn StoreMenu(store_id: ReadOnlySignal<Option<i64>>) -> Element {
    let session = use_session();
    let api = use_context::<StoreApi>();

    let mut detail = use_resource(move || {
        let api = api.clone();
        let role = (session.role)();
        let id = store_id();
        async move {
            // Absent id short-circuits before any request is issued.
            let result = api.store_menus_if_selected(role, id).await?;
            Some(result.inspect_err(|err| tracing::error!("failed to load store {id:?}: {err}")))
        }
    });

    rsx! {
        match &*detail.read() {
            Some(Some(Ok(menus))) => rsx! {
                StoreBanner { store_name: menus.store_name().to_string() }
                MenuVariant { menus: menus.clone() }
            },
            Some(Some(Err(err))) => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state",
                            h2 { "Could not load this store" }
                            p { "{err.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| detail.restart(),
                                "Retry"
                            }
                        }
                    }
                }
            },
            Some(None) => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state", p { "No store selected." } }
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

/// Banner with the store's display name.
#[component]
fn StoreBanner(store_name: String) -> Element {
    rsx! {
        div { class: "store-banner",
            h1 { "{store_name}" }
        }
    }
}

/// Dispatch to exactly one of the two list renderers.
#[component]
fn MenuVariant(menus: StoreMenus) -> Element {
    if menus.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    div { class: "empty-state", p { "This store has no menu yet." } }
                }
            }
        };
    }
    match menus {
        StoreMenus::Child(detail) => rsx! {
            ChildMenuList { items: detail.menus }
        },
        StoreMenus::Standard(detail) => rsx! {
            MenuList { items: detail.menus }
        },
    }
}

/// Menu list shown to members, supporters, and owners. Pure renderer.
#[component]
fn MenuList(items: Vec<MenuItem>) -> Element {
    rsx! {
        DataTable { columns: vec!["Menu", "Price", "Left today"],
            for item in items {
                DataTableRow { key: "{item.menu_id}",
                    DataTableCell {
                        MenuName {
                            name: item.menu_name.clone(),
                            image: item.menu_image.clone(),
                            image_name: item.menu_image_name.clone(),
                        }
                    }
                    DataTableCell { "{item.menu_price}" }
                    DataTableCell { "{item.menu_count}" }
                }
            }
        }
    }
}

/// Menu list shown to child accounts, with the favorite mark. Pure renderer.
#[component]
fn ChildMenuList(items: Vec<ChildMenuItem>) -> Element {
    rsx! {
        DataTable { columns: vec!["Menu", "Price", ""],
            for item in items {
                DataTableRow { key: "{item.menu_id}",
                    DataTableCell {
                        MenuName {
                            name: item.menu_name.clone(),
                            image: item.menu_image.clone(),
                            image_name: item.menu_image_name.clone(),
                        }
                    }
                    DataTableCell { "{item.menu_price}" }
                    DataTableCell {
                        if item.favorite_menu {
                            Badge { variant: BadgeVariant::Primary,
                                Icon::<LdHeart> { icon: LdHeart, width: 12, height: 12 }
                                "Favorite"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Menu cell with an optional thumbnail.
#[component]
fn MenuName(name: String, image: Option<String>, image_name: Option<String>) -> Element {
    rsx! {
        div { class: "menu-name",
            if let Some(url) = image {
                img {
                    class: "menu-thumb",
                    src: "{url}",
                    alt: image_name.unwrap_or_default(),
                }
            }
            span { "{name}" }
        }
    }
}
