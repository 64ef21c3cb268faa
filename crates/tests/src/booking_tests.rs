use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::BookingState;

use crate::common::stub_backend;

#[tokio::test]
async fn store_bookings_round_trip() {
    let (api, _stub) = stub_backend().await;

    let bookings = api.store_bookings(3).await.unwrap();

    assert_eq!(bookings.len(), 1);
    let booking = &bookings[0];
    assert_eq!(booking.booking_id, 3);
    assert_eq!(booking.child_name, "Minjun");
    assert_eq!(booking.menu_name, "Kimbap");
    assert_eq!(
        booking.booking_time,
        Utc.with_ymd_and_hms(2026, 3, 1, 11, 30, 0).unwrap()
    );
    assert!(BookingState::from_str_or_default(&booking.booking_state).is_waiting());
}

#[tokio::test]
async fn approving_posts_the_state_body() {
    let (api, stub) = stub_backend().await;

    api.update_booking_state(3, BookingState::Approve)
        .await
        .unwrap();

    assert_eq!(stub.last_body(), Some(json!({"bookingState": "APPROVE"})));
}

#[tokio::test]
async fn rejecting_posts_the_state_body() {
    let (api, stub) = stub_backend().await;

    api.update_booking_state(3, BookingState::Reject)
        .await
        .unwrap();

    assert_eq!(stub.last_body(), Some(json!({"bookingState": "REJECT"})));
}
