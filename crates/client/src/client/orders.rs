//! Menu, ordering, order history, order verification and docs.

use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

use jwt_pizza_core::{DocType, Endpoints, Menu, Order, OrderHistory, OrderResponse, VerifyResponse};

use super::PizzaClient;
use crate::error::ServiceError;

/// Menu endpoint.
pub const MENU_PATH: &str = "/api/order/menu";

/// Order endpoint (GET history, POST new order).
pub const ORDER_PATH: &str = "/api/order";

/// Order verification endpoint on the pizza factory.
pub const VERIFY_PATH: &str = "/api/order/verify";

/// Endpoint listing, on either service.
pub const DOCS_PATH: &str = "/api/docs";

#[derive(Serialize)]
struct VerifyRequest<'a> {
    jwt: &'a str,
}

impl PizzaClient {
    /// The current menu.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_menu(&self) -> Result<Menu, ServiceError> {
        self.get(MENU_PATH).await
    }

    /// The logged-in diner's order history.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` (typically 401) without a valid session.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<OrderHistory, ServiceError> {
        self.get(ORDER_PATH).await
    }

    /// Place an order.
    ///
    /// The returned order carries the service-assigned id and date, and the
    /// response carries the factory-signed order token, all unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the service or factory rejects the order.
    #[instrument(skip(self, order), fields(franchise_id = %order.franchise_id, store_id = %order.store_id, items = order.items.len()))]
    pub async fn order(&self, order: &Order) -> Result<OrderResponse, ServiceError> {
        let response: OrderResponse = self.call(ORDER_PATH, Method::POST, Some(order)).await?;

        debug!(order_id = ?response.order.id, "Order placed");
        Ok(response)
    }

    /// Ask the pizza factory to verify an order token.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the factory rejects the token.
    #[instrument(skip(self, jwt))]
    pub async fn verify_order(&self, jwt: &str) -> Result<VerifyResponse, ServiceError> {
        let path = self.factory_path(VERIFY_PATH);
        self.call(&path, Method::POST, Some(&VerifyRequest { jwt }))
            .await
    }

    /// Endpoint listing of the pizza service or the pizza factory.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn docs(&self, doc_type: DocType) -> Result<Endpoints, ServiceError> {
        match doc_type {
            DocType::Factory => self.get(&self.factory_path(DOCS_PATH)).await,
            DocType::Service => self.get(DOCS_PATH).await,
        }
    }
}
