use api::StoreApi;
use dioxus::prelude::*;
use shared_types::{Booking, BookingState};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableCell,
    DataTableRow, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::routes::Route;

/// Booking queue for one of the owner's stores.
#[component]
pub fn OwnerBooking(store_id: i64) -> Element {
    let api = use_context::<StoreApi>();

    let mut bookings = use_resource(move || {
        let api = api.clone();
        async move {
            api.store_bookings(store_id)
                .await
                .inspect_err(|err| {
                    tracing::error!("failed to load bookings for store {store_id}: {err}")
                })
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "Bookings" }
            PageActions {
                Link { to: Route::OwnerStore { store_id },
                    Button { variant: ButtonVariant::Ghost, "Back to store" }
                }
            }
        }
        match &*bookings.read() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state", p { "No bookings yet." } }
                    }
                }
            },
            Some(Ok(list)) => rsx! {
                DataTable { columns: vec!["Child", "Menu", "Time", "State", ""],
                    for booking in list.iter().cloned() {
                        BookingRow {
                            key: "{booking.booking_id}",
                            booking,
                            on_changed: move |_| bookings.restart(),
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state",
                            h2 { "Could not load bookings" }
                            p { "{err.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| bookings.restart(),
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

fn state_badge_variant(state: BookingState) -> BadgeVariant {
    match state {
        BookingState::Waiting => BadgeVariant::Secondary,
        BookingState::Approve => BadgeVariant::Primary,
        BookingState::Reject => BadgeVariant::Destructive,
    }
}

/// One booking row with approve/reject actions while the booking is pending.
#[component]
fn BookingRow(booking: Booking, on_changed: EventHandler<()>) -> Element {
    let api = use_context::<StoreApi>();
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let state = BookingState::from_str_or_default(&booking.booking_state);
    let booking_id = booking.booking_id;

    let set_state = use_callback(move |next: BookingState| {
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.update_booking_state(booking_id, next).await {
                Ok(()) => {
                    error_msg.set(None);
                    on_changed.call(());
                }
                Err(err) => {
                    tracing::error!("failed to update booking {booking_id}: {err}");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            saving.set(false);
        });
    });

    rsx! {
        DataTableRow {
            DataTableCell { "{booking.child_name}" }
            DataTableCell { "{booking.menu_name}" }
            DataTableCell { {booking.booking_time.format("%Y-%m-%d %H:%M").to_string()} }
            DataTableCell {
                Badge { variant: state_badge_variant(state), "{booking.booking_state}" }
            }
            DataTableCell {
                if state.is_waiting() {
                    div { class: "row-actions",
                        Button {
                            disabled: saving(),
                            onclick: move |_| set_state(BookingState::Approve),
                            "Approve"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            disabled: saving(),
                            onclick: move |_| set_state(BookingState::Reject),
                            "Reject"
                        }
                    }
                }
                if let Some(message) = error_msg() {
                    p { class: "inline-error", "{message}" }
                }
            }
        }
    }
}
