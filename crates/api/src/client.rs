use serde::de::DeserializeOwned;
use shared_types::{
    Booking, BookingState, ChildProfile, RegisterStoreRequest, Role, StoreMenus, StoreSummary,
    UpdateBookingStateRequest,
};

use crate::error::ApiError;

/// Backend prefix used when `API_BASE_URL` is not set at build time.
const DEFAULT_BASE_URL: &str = "/api";

/// Role-selected path for the store detail resource.
///
/// Child accounts read the child variant; every other role, including an
/// absent or unrecognized one, reads the standard variant.
pub fn store_detail_path(role: Role, store_id: i64) -> String {
    if role.is_child() {
        format!("stores/child/{store_id}")
    } else {
        format!("stores/{store_id}")
    }
}

/// Typed client for the meal-support backend REST API.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct StoreApi {
    client: reqwest::Client,
    base_url: String,
}

impl StoreApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a client from the compile-time `API_BASE_URL` variable, falling
    /// back to a same-origin `/api` prefix.
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// Fetch the store detail variant matching `role`.
    ///
    /// Exactly one request is issued and exactly one [`StoreMenus`] variant
    /// is produced, so the two list shapes can never be mixed downstream.
    pub async fn store_menus(&self, role: Role, store_id: i64) -> Result<StoreMenus, ApiError> {
        let path = store_detail_path(role, store_id);
        if role.is_child() {
            Ok(StoreMenus::Child(self.get_json(&path).await?))
        } else {
            Ok(StoreMenus::Standard(self.get_json(&path).await?))
        }
    }

    /// Fetch the store menus when a store is selected at all.
    ///
    /// `None` in means no store is selected; `None` out guarantees that no
    /// request was issued for it.
    pub async fn store_menus_if_selected(
        &self,
        role: Role,
        store_id: Option<i64>,
    ) -> Option<Result<StoreMenus, ApiError>> {
        let store_id = store_id?;
        Some(self.store_menus(role, store_id).await)
    }

    /// Stores within walking distance of the given point.
    pub async fn nearby_stores(&self, lat: f64, lon: f64) -> Result<Vec<StoreSummary>, ApiError> {
        self.get_json(&format!("stores?lat={lat}&lon={lon}")).await
    }

    /// The signed-in child's profile and remaining support balance.
    pub async fn child_profile(&self) -> Result<ChildProfile, ApiError> {
        self.get_json("members/child").await
    }

    /// Stores owned by the signed-in owner.
    pub async fn owner_stores(&self) -> Result<Vec<StoreSummary>, ApiError> {
        self.get_json("stores/owner").await
    }

    /// Bookings placed against one of the owner's stores.
    pub async fn store_bookings(&self, store_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.get_json(&format!("bookings/store/{store_id}")).await
    }

    /// Approve or reject a pending booking.
    pub async fn update_booking_state(
        &self,
        booking_id: i64,
        state: BookingState,
    ) -> Result<(), ApiError> {
        let body = UpdateBookingStateRequest {
            booking_state: state.as_str().to_string(),
        };
        let response = self
            .client
            .post(self.url(&format!("bookings/{booking_id}/state")))
            .json(&body)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Claim an existing store as its owner.
    pub async fn register_store(&self, request: &RegisterStoreRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("stores/register"))
            .json(request)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }
}
