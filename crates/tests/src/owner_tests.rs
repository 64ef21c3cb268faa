use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::RegisterStoreRequest;
use validator::Validate;

use crate::common::stub_backend;

#[tokio::test]
async fn owner_stores_round_trip() {
    let (api, _stub) = stub_backend().await;

    let stores = api.owner_stores().await.unwrap();

    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].store_id, 3);
    assert_eq!(stores[0].store_name, "Kim's Snacks");
    assert_eq!(stores[0].store_open_time.as_deref(), Some("10:00-20:00"));
}

#[tokio::test]
async fn register_posts_the_wire_shape() {
    let (api, stub) = stub_backend().await;

    let request = RegisterStoreRequest { store_id: 42 };
    request.validate().unwrap();
    api.register_store(&request).await.unwrap();

    assert_eq!(stub.last_body(), Some(json!({"storeId": 42})));
}

#[test]
fn register_validation_rejects_non_positive_ids() {
    assert!(RegisterStoreRequest { store_id: 0 }.validate().is_err());
    assert!(RegisterStoreRequest { store_id: 42 }.validate().is_ok());
}
