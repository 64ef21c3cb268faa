use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Meal booking row for the owner's booking view.
///
/// `booking_state` stays a raw wire string; parse it with
/// [`crate::BookingState::from_str_or_default`] when branching on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: i64,
    pub child_name: String,
    pub menu_name: String,
    pub booking_time: DateTime<Utc>,
    pub booking_state: String,
}
