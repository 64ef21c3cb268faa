use dioxus::prelude::*;

use crate::components::StoreMenu;

/// Child store detail page — menu of the store picked on the child main page.
///
/// The store id arrives as an optional query parameter; without one the menu
/// view stays empty and no request is made.
#[component]
pub fn ChildStoreDetail(store_id: Option<i64>) -> Element {
    rsx! {
        StoreMenu { store_id }
    }
}
