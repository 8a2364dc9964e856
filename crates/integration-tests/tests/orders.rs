//! Menu, ordering, order history, verification and docs.

#![allow(clippy::unwrap_used)]

use jwt_pizza_core::{DocType, FranchiseId, MenuId, Order, OrderId, StoreId};
use jwt_pizza_integration_tests::{TestContext, fixtures};
use serde_json::json;

#[tokio::test]
async fn test_menu_prices() {
    let ctx = TestContext::new().await;
    ctx.service
        .respond("GET", "/api/order/menu", 200, fixtures::menu())
        .await;

    let menu = ctx.client.get_menu().await.unwrap();

    assert_eq!(menu[0].id, MenuId::from(1));
    assert_eq!(menu[0].title, "Veggie");
    assert_eq!(menu[0].price.to_string(), "₿0.0038");
    assert_eq!(menu[1].price.to_string(), "₿0.0042");
}

#[tokio::test]
async fn test_order_passes_service_fields_through() {
    let ctx = TestContext::logged_in("abcdef").await;
    ctx.service
        .respond("GET", "/api/order/menu", 200, fixtures::menu())
        .await;
    ctx.service
        .respond(
            "POST",
            "/api/order",
            200,
            json!({
                "order": {
                    "items": [
                        { "menuId": 1, "description": "Veggie", "price": 0.0038 },
                        { "menuId": 2, "description": "Pepperoni", "price": 0.0042 }
                    ],
                    "storeId": "4",
                    "franchiseId": 2,
                    "id": "23"
                },
                "jwt": "eyJpYXQ"
            }),
        )
        .await;

    let menu = ctx.client.get_menu().await.unwrap();
    let mut cart = Order::new(FranchiseId::from(2), StoreId::from("4"));
    for item in &menu {
        cart.add_item(item);
    }

    let response = ctx.client.order(&cart).await.unwrap();
    assert_eq!(response.order.id, Some(OrderId::from("23")));
    assert_eq!(response.jwt, "eyJpYXQ");
    assert_eq!(response.order.total(), cart.total());

    let request = ctx.service.wait_for("POST", "/api/order").await;
    assert_eq!(request.bearer(), Some("abcdef"));
    assert_eq!(
        request.body,
        json!({
            "franchiseId": 2,
            "storeId": "4",
            "items": [
                { "menuId": 1, "description": "Veggie", "price": 0.0038 },
                { "menuId": 2, "description": "Pepperoni", "price": 0.0042 }
            ]
        })
    );
}

#[tokio::test]
async fn test_rejected_order_surfaces_factory_message() {
    let ctx = TestContext::logged_in("abcdef").await;
    ctx.service
        .respond(
            "POST",
            "/api/order",
            500,
            json!({ "message": "Failed to fulfill order at factory" }),
        )
        .await;

    let cart = Order::new(FranchiseId::from(2), StoreId::from(4));
    let err = ctx.client.order(&cart).await.unwrap_err();
    assert_eq!(err.code(), 500);
    assert_eq!(err.message(), "Failed to fulfill order at factory");
}

#[tokio::test]
async fn test_order_history() {
    let ctx = TestContext::logged_in("abcdef").await;
    ctx.service
        .respond(
            "GET",
            "/api/order",
            200,
            json!({
                "dinerId": 3,
                "orders": [{
                    "id": 1,
                    "franchiseId": 2,
                    "storeId": 4,
                    "date": "2024-06-05T05:14:40.000Z",
                    "items": [{ "id": 1, "menuId": 1, "description": "Veggie", "price": 0.0038 }]
                }],
                "page": 1
            }),
        )
        .await;

    let history = ctx.client.get_orders().await.unwrap();
    assert_eq!(history.orders.len(), 1);
    assert_eq!(history.page, 1);
    assert!(history.orders[0].date.is_some());
}

#[tokio::test]
async fn test_verify_goes_to_factory() {
    let ctx = TestContext::logged_in("abcdef").await;
    ctx.factory
        .respond(
            "POST",
            "/api/order/verify",
            200,
            json!({
                "message": "valid",
                "payload": {
                    "vendor": { "id": "jwt-pizza", "name": "JWT Pizza" },
                    "diner": { "name": "Kai Chen" },
                    "order": { "id": "23" }
                }
            }),
        )
        .await;

    let response = ctx.client.verify_order("eyJpYXQ").await.unwrap();
    assert_eq!(response.message, "valid");
    assert_eq!(response.payload["order"]["id"], "23");

    let request = ctx.factory.wait_for("POST", "/api/order/verify").await;
    assert_eq!(request.body, json!({ "jwt": "eyJpYXQ" }));
    assert!(ctx.service.requests().await.is_empty());
}

#[tokio::test]
async fn test_docs_by_type() {
    let ctx = TestContext::new().await;
    ctx.service
        .respond(
            "GET",
            "/api/docs",
            200,
            json!({
                "version": "20240518.154317",
                "endpoints": [{
                    "method": "GET",
                    "path": "/api/order/menu",
                    "description": "Get the pizza menu",
                    "requiresAuth": false,
                    "example": "curl localhost:3000/api/order/menu",
                    "response": [{ "id": 1, "title": "Veggie" }]
                }]
            }),
        )
        .await;
    ctx.factory
        .respond(
            "GET",
            "/api/docs",
            200,
            json!({ "endpoints": [{ "method": "POST", "path": "/api/order/verify" }] }),
        )
        .await;

    let service = ctx.client.docs(DocType::Service).await.unwrap();
    assert_eq!(service.version.as_deref(), Some("20240518.154317"));
    assert_eq!(service.endpoints[0].path, "/api/order/menu");

    let factory = ctx.client.docs(DocType::Factory).await.unwrap();
    assert!(factory.version.is_none());
    assert_eq!(factory.endpoints[0].method, "POST");

    assert_eq!(ctx.service.requests().await.len(), 1);
    assert_eq!(ctx.factory.requests().await.len(), 1);
}
