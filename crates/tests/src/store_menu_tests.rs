use api::{ApiErrorKind, StoreApi};
use pretty_assertions::assert_eq;
use shared_types::{Role, StoreMenus};

use crate::common::stub_backend;

#[tokio::test]
async fn member_role_reads_the_standard_endpoint() {
    let (api, stub) = stub_backend().await;

    let menus = api.store_menus(Role::Member, 42).await.unwrap();

    assert_eq!(stub.standard_count(), 1);
    assert_eq!(stub.child_count(), 0);
    assert_eq!(menus.store_name(), "Store 42");
    match menus {
        StoreMenus::Standard(detail) => {
            assert_eq!(detail.menus.len(), 1);
            assert_eq!(detail.menus[0].menu_name, "Chips");
            assert_eq!(detail.menus[0].menu_price, 1000);
            assert_eq!(detail.menus[0].menu_count, 5);
        }
        StoreMenus::Child(_) => panic!("member fetch must produce the standard variant"),
    }
}

#[tokio::test]
async fn child_role_reads_the_child_endpoint() {
    let (api, stub) = stub_backend().await;

    let menus = api.store_menus(Role::Child, 42).await.unwrap();

    assert_eq!(stub.child_count(), 1);
    assert_eq!(stub.standard_count(), 0);
    assert!(menus.is_child());
    match menus {
        StoreMenus::Child(detail) => {
            assert!(detail.menus[0].favorite_menu);
        }
        StoreMenus::Standard(_) => panic!("child fetch must produce the child variant"),
    }
}

#[tokio::test]
async fn unrecognized_stored_role_takes_the_standard_path() {
    let (api, stub) = stub_backend().await;

    let role = Role::from_str_or_default("SOMETHING_NEW");
    let menus = api.store_menus(role, 42).await.unwrap();

    assert_eq!(stub.standard_count(), 1);
    assert_eq!(stub.child_count(), 0);
    assert!(!menus.is_child());
}

#[tokio::test]
async fn owner_and_supporter_roles_take_the_standard_path() {
    let (api, stub) = stub_backend().await;

    api.store_menus(Role::Owner, 42).await.unwrap();
    api.store_menus(Role::Supporter, 42).await.unwrap();

    assert_eq!(stub.standard_count(), 2);
    assert_eq!(stub.child_count(), 0);
}

#[tokio::test]
async fn absent_store_selection_issues_no_request() {
    let (api, stub) = stub_backend().await;

    assert!(api.store_menus_if_selected(Role::Member, None).await.is_none());
    assert!(api.store_menus_if_selected(Role::Child, None).await.is_none());

    assert_eq!(stub.standard_count(), 0);
    assert_eq!(stub.child_count(), 0);
}

#[tokio::test]
async fn selected_store_fetches_through_the_selection_guard() {
    let (api, stub) = stub_backend().await;

    let menus = api
        .store_menus_if_selected(Role::Child, Some(42))
        .await
        .unwrap()
        .unwrap();

    assert!(menus.is_child());
    assert_eq!(stub.child_count(), 1);
}

#[tokio::test]
async fn backend_failure_surfaces_as_a_status_error() {
    let (api, stub) = stub_backend().await;

    let err = api.store_menus(Role::Member, 500).await.unwrap_err();

    assert_eq!(stub.standard_count(), 1);
    assert_eq!(err.kind, ApiErrorKind::Status);
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn identifier_change_issues_a_second_request() {
    let (api, stub) = stub_backend().await;

    let first = api.store_menus(Role::Member, 42).await.unwrap();
    assert_eq!(first.store_name(), "Store 42");

    let second = api.store_menus(Role::Member, 43).await.unwrap();
    assert_eq!(second.store_name(), "Store 43");

    assert_eq!(stub.standard_count(), 2);
}

#[tokio::test]
async fn unreachable_backend_surfaces_as_a_network_error() {
    // Nothing listens on this port.
    let api = StoreApi::new("http://127.0.0.1:9");

    let err = api.store_menus(Role::Member, 42).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status, None);
}
