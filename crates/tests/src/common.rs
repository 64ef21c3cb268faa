use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use api::StoreApi;

/// Shared state for the stub backend: per-endpoint hit counts and the last
/// body received on mutating routes.
#[derive(Clone, Default)]
pub struct StubState {
    pub standard_hits: Arc<AtomicUsize>,
    pub child_hits: Arc<AtomicUsize>,
    pub last_body: Arc<Mutex<Option<Value>>>,
}

impl StubState {
    pub fn standard_count(&self) -> usize {
        self.standard_hits.load(Ordering::SeqCst)
    }

    pub fn child_count(&self) -> usize {
        self.child_hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

/// Standard store-detail fixture, shaped exactly like the backend response.
pub fn standard_store_fixture(store_name: &str) -> Value {
    json!({
        "storeName": store_name,
        "menuMemberResponseDTOList": [
            {
                "menuId": 1,
                "menuName": "Chips",
                "menuPrice": 1000,
                "menuCount": 5,
                "menuImage": null,
                "menuImageName": null
            }
        ]
    })
}

/// Child store-detail fixture with one favorite menu.
pub fn child_store_fixture(store_name: &str) -> Value {
    json!({
        "storeName": store_name,
        "menuChildResponseDTOList": [
            {
                "menuId": 1,
                "menuName": "Chips",
                "menuPrice": 1000,
                "favoriteMenu": true,
                "menuImage": null,
                "menuImageName": null
            }
        ]
    })
}

/// Stub of the backend store endpoints. Store 500 always fails, mirroring a
/// backend error; every other id answers with a fixture named after the id.
fn store_routes(state: StubState) -> Router {
    async fn standard(
        State(state): State<StubState>,
        Path(store_id): Path<i64>,
    ) -> Result<Json<Value>, StatusCode> {
        state.standard_hits.fetch_add(1, Ordering::SeqCst);
        if store_id == 500 {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(Json(standard_store_fixture(&format!("Store {store_id}"))))
    }

    async fn child(
        State(state): State<StubState>,
        Path(store_id): Path<i64>,
    ) -> Result<Json<Value>, StatusCode> {
        state.child_hits.fetch_add(1, Ordering::SeqCst);
        if store_id == 500 {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(Json(child_store_fixture(&format!("Store {store_id}"))))
    }

    Router::new()
        .route("/stores/{store_id}", get(standard))
        .route("/stores/child/{store_id}", get(child))
        .with_state(state)
}

/// Remaining read endpoints with canned data, plus body-capturing mutations.
fn misc_routes(state: StubState) -> Router {
    async fn nearby(Query(params): Query<Vec<(String, String)>>) -> Json<Value> {
        assert!(params.iter().any(|(k, _)| k == "lat"));
        assert!(params.iter().any(|(k, _)| k == "lon"));
        Json(json!([
            {"storeId": 7, "storeName": "Bunsik House", "storeAddress": "12 Hill St"},
            {"storeId": 8, "storeName": "Snack Corner", "storeAlwaysShare": true}
        ]))
    }

    async fn owner_stores() -> Json<Value> {
        Json(json!([
            {"storeId": 3, "storeName": "Kim's Snacks", "storeOpenTime": "10:00-20:00"}
        ]))
    }

    async fn child_profile() -> Json<Value> {
        Json(json!({"childName": "Minjun", "childEmail": "minjun@example.com", "supportBalance": 9000}))
    }

    async fn bookings() -> Json<Value> {
        Json(json!([
            {
                "bookingId": 3,
                "childName": "Minjun",
                "menuName": "Kimbap",
                "bookingTime": "2026-03-01T11:30:00Z",
                "bookingState": "WAITING"
            }
        ]))
    }

    async fn booking_state(
        State(state): State<StubState>,
        Json(body): Json<Value>,
    ) -> StatusCode {
        *state.last_body.lock().unwrap() = Some(body);
        StatusCode::OK
    }

    async fn register(State(state): State<StubState>, Json(body): Json<Value>) -> StatusCode {
        *state.last_body.lock().unwrap() = Some(body);
        StatusCode::OK
    }

    Router::new()
        .route("/stores", get(nearby))
        .route("/stores/owner", get(owner_stores))
        .route("/members/child", get(child_profile))
        .route("/bookings/store/{store_id}", get(bookings))
        .route("/bookings/{booking_id}/state", post(booking_state))
        .route("/stores/register", post(register))
        .with_state(state)
}

/// Bind the stub backend on an ephemeral port and return a client pointed at
/// it together with the observable stub state.
pub async fn stub_backend() -> (StoreApi, StubState) {
    let state = StubState::default();
    let router = store_routes(state.clone()).merge(misc_routes(state.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    (StoreApi::new(format!("http://{addr}")), state)
}
