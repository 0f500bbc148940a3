//! File-backed storage behavior across handles and reopens.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use mercadito_auth::{ChangeKind, Slot};
use mercadito_integration_tests::{TestContext, buyer_input, seller_input};

#[tokio::test]
async fn test_accounts_survive_a_restart() {
    let ctx = TestContext::new();
    ctx.service
        .register(seller_input("vendedor@test.com"))
        .await
        .unwrap();

    // A fresh service over the same directory (an application restart).
    let reopened = ctx.reopen();
    let user = reopened
        .users()
        .find_by_email("vendedor@test.com")
        .unwrap()
        .unwrap();
    assert_eq!(user.business_name.as_deref(), Some("Ferretería Silva"));

    // The stored digest still verifies.
    reopened
        .login("vendedor@test.com", &SecretString::from("Test123!"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_session_survives_a_restart() {
    let ctx = TestContext::new();
    ctx.service
        .register(buyer_input("maria@test.com"))
        .await
        .unwrap();
    ctx.service
        .login("maria@test.com", &SecretString::from("Test123!"))
        .await
        .unwrap();

    let reopened = ctx.reopen();
    assert!(reopened.is_authenticated());
    assert_eq!(
        reopened.current_user().unwrap().unwrap().email.as_str(),
        "maria@test.com"
    );
}

#[tokio::test]
async fn test_storage_layout_on_disk() {
    let ctx = TestContext::new();
    ctx.service
        .register(buyer_input("maria@test.com"))
        .await
        .unwrap();
    ctx.service
        .login("maria@test.com", &SecretString::from("Test123!"))
        .await
        .unwrap();

    // users: a JSON array of records with camelCase keys.
    let users_raw = std::fs::read_to_string(ctx.data_dir().join("users.json")).unwrap();
    let users: serde_json::Value = serde_json::from_str(&users_raw).unwrap();
    let first = users.as_array().unwrap().first().unwrap();
    assert!(first.get("displayName").is_some());
    assert!(first.get("passwordHash").is_some());

    // currentUser: a JSON object, removed entirely on logout.
    assert!(ctx.data_dir().join("currentUser.json").is_file());
    ctx.service.logout().unwrap();
    assert!(!ctx.data_dir().join("currentUser.json").exists());
}

#[tokio::test]
async fn test_logout_in_one_tab_is_seen_by_the_other() {
    let ctx = TestContext::new();
    ctx.service
        .register(buyer_input("maria@test.com"))
        .await
        .unwrap();
    ctx.service
        .login("maria@test.com", &SecretString::from("Test123!"))
        .await
        .unwrap();

    // The "other tab": an independent handle over the same directory.
    let other_tab = ctx.reopen();
    assert!(other_tab.is_authenticated());

    other_tab.logout().unwrap();

    // The first tab re-checks instead of caching, so the removal is visible.
    assert!(!ctx.service.is_authenticated());
    assert!(ctx.service.current_user().unwrap().is_none());
}

#[tokio::test]
async fn test_in_process_observers_get_a_removal_notification() {
    let ctx = TestContext::new();
    ctx.service
        .register(buyer_input("maria@test.com"))
        .await
        .unwrap();
    ctx.service
        .login("maria@test.com", &SecretString::from("Test123!"))
        .await
        .unwrap();

    let mut events = ctx.service.sessions().subscribe();
    ctx.service.logout().unwrap();

    let event = events.recv().await.unwrap();
    assert_eq!(event.slot, Slot::CurrentUser);
    assert_eq!(event.kind, ChangeKind::Removed);
}
