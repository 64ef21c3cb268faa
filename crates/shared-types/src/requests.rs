use serde::{Deserialize, Serialize};

/// Body for `POST stores/register` — an owner claiming an existing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct RegisterStoreRequest {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "store id must be positive"))
    )]
    pub store_id: i64,
}

/// Body for `POST bookings/{id}/state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStateRequest {
    pub booking_state: String,
}
