//! Login, registration, logout and token persistence.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use jwt_pizza_client::FileTokenStore;
use jwt_pizza_core::{Email, UserId};
use jwt_pizza_integration_tests::{TestContext, fixtures};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

fn email(s: &str) -> Email {
    Email::parse(s).unwrap()
}

fn password(s: &str) -> SecretString {
    SecretString::from(s)
}

#[tokio::test]
async fn test_login_persists_token() {
    let ctx = TestContext::new().await;
    ctx.service
        .respond("PUT", "/api/auth", 200, fixtures::auth_response(fixtures::diner(), "abcdef"))
        .await;

    let user = ctx
        .client
        .login(&email("d@jwt.com"), &password("a"))
        .await
        .unwrap();

    assert_eq!(user.id, UserId::from(3));
    assert_eq!(user.name, "Kai Chen");
    assert_eq!(ctx.stored_token().as_deref(), Some("abcdef"));

    let request = ctx.service.wait_for("PUT", "/api/auth").await;
    assert_eq!(request.body, json!({ "email": "d@jwt.com", "password": "a" }));
    assert!(request.authorization.is_none());
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let ctx = TestContext::new().await;
    ctx.service
        .respond("PUT", "/api/auth", 401, json!({ "message": "Unauthorized" }))
        .await;

    let err = ctx
        .client
        .login(&email("d@jwt.com"), &password("wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), 401);
    assert_eq!(err.message(), "Unauthorized");
    assert!(err.is_unauthorized());
    assert!(ctx.stored_token().is_none());
}

#[tokio::test]
async fn test_register_persists_token() {
    let ctx = TestContext::new().await;
    ctx.service
        .respond("POST", "/api/auth", 200, fixtures::auth_response(fixtures::diner(), "tttttt"))
        .await;

    let user = ctx
        .client
        .register("Kai Chen", &email("d@jwt.com"), &password("a"))
        .await
        .unwrap();

    assert_eq!(user.email.as_str(), "d@jwt.com");
    assert_eq!(ctx.stored_token().as_deref(), Some("tttttt"));

    let request = ctx.service.wait_for("POST", "/api/auth").await;
    assert_eq!(
        request.body,
        json!({ "name": "Kai Chen", "email": "d@jwt.com", "password": "a" })
    );
}

#[tokio::test]
async fn test_register_conflict_keeps_previous_token() {
    let ctx = TestContext::logged_in("previous").await;
    ctx.service
        .respond("POST", "/api/auth", 409, json!({ "message": "email already registered" }))
        .await;

    let err = ctx
        .client
        .register("Kai Chen", &email("d@jwt.com"), &password("a"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), 409);
    assert_eq!(err.message(), "email already registered");
    assert_eq!(ctx.stored_token().as_deref(), Some("previous"));
}

#[tokio::test]
async fn test_logout_sends_token_then_clears_it() {
    let ctx = TestContext::logged_in("abcdef").await;
    ctx.service
        .respond("DELETE", "/api/auth", 200, json!({ "message": "logout successful" }))
        .await;

    let handle = ctx.client.logout().unwrap();
    assert!(ctx.stored_token().is_none());

    handle.unwrap().await.unwrap();
    let request = ctx.service.wait_for("DELETE", "/api/auth").await;
    assert_eq!(request.bearer(), Some("abcdef"));
}

#[tokio::test]
async fn test_logout_clears_token_when_server_fails() {
    let ctx = TestContext::logged_in("abcdef").await;
    ctx.service
        .respond("DELETE", "/api/auth", 500, json!({ "message": "database down" }))
        .await;

    let handle = ctx.client.logout().unwrap();
    assert!(ctx.stored_token().is_none());

    // The failure is only logged.
    handle.unwrap().await.unwrap();
    ctx.service.wait_for("DELETE", "/api/auth").await;
    assert!(ctx.stored_token().is_none());
}

#[tokio::test]
async fn test_file_store_keeps_token_across_clients() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.json");

    let ctx = TestContext::with_store(Arc::new(FileTokenStore::new(&path))).await;
    ctx.service
        .respond("PUT", "/api/auth", 200, fixtures::auth_response(fixtures::diner(), "abcdef"))
        .await;
    ctx.client
        .login(&email("d@jwt.com"), &password("a"))
        .await
        .unwrap();

    let next = TestContext::with_store(Arc::new(FileTokenStore::new(&path))).await;
    next.service
        .respond("GET", "/api/user/me", 200, fixtures::diner())
        .await;

    let user = next.client.get_user().await.unwrap();
    assert_eq!(user.name, "Kai Chen");

    let request = next.service.wait_for("GET", "/api/user/me").await;
    assert_eq!(request.bearer(), Some("abcdef"));

    let stored = FileTokenStore::new(&path);
    assert_eq!(
        jwt_pizza_client::TokenStore::load(&stored)
            .unwrap()
            .map(|t| t.expose_secret().to_string())
            .as_deref(),
        Some("abcdef")
    );
}
