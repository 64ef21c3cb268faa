use pretty_assertions::assert_eq;

use crate::common::stub_backend;

#[tokio::test]
async fn nearby_stores_round_trips_summaries() {
    let (api, _stub) = stub_backend().await;

    let stores = api.nearby_stores(36.3553, 127.2986).await.unwrap();

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].store_id, 7);
    assert_eq!(stores[0].store_name, "Bunsik House");
    assert_eq!(stores[0].store_address.as_deref(), Some("12 Hill St"));
    assert!(!stores[0].store_always_share);

    assert_eq!(stores[1].store_id, 8);
    assert_eq!(stores[1].store_address, None);
    assert!(stores[1].store_always_share);
}

#[tokio::test]
async fn child_profile_round_trips() {
    let (api, _stub) = stub_backend().await;

    let profile = api.child_profile().await.unwrap();

    assert_eq!(profile.child_name, "Minjun");
    assert_eq!(profile.child_email.as_deref(), Some("minjun@example.com"));
    assert_eq!(profile.support_balance, 9000);
}
