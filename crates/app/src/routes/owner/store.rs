use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, PageActions, PageHeader, PageTitle};

use crate::components::StoreMenu;
use crate::routes::Route;

/// Owner's view of one of their stores — the standard menu list plus a jump
/// to the booking queue.
#[component]
pub fn OwnerStore(store_id: i64) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "My store" }
            PageActions {
                Link { to: Route::OwnerBooking { store_id },
                    Button { variant: ButtonVariant::Secondary, "Bookings" }
                }
                Link { to: Route::OwnerStoreList {},
                    Button { variant: ButtonVariant::Ghost, "All stores" }
                }
            }
        }
        StoreMenu { store_id: Some(store_id) }
    }
}
