//! Orders, order history and order verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FranchiseId, MenuId, MenuItem, OrderId, Price, StoreId, UserId};

/// A pizza in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id: MenuId,
    pub description: String,
    pub price: Price,
}

impl From<&MenuItem> for OrderItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            menu_id: item.id.clone(),
            description: item.title.clone(),
            price: item.price,
        }
    }
}

/// An order, either a cart being built or one the service has accepted.
///
/// `id` and `date` are assigned by the service and are absent until the
/// order has been placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub franchise_id: FranchiseId,
    pub store_id: StoreId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Start an empty cart for a store.
    #[must_use]
    pub const fn new(franchise_id: FranchiseId, store_id: StoreId) -> Self {
        Self {
            id: None,
            franchise_id,
            store_id,
            date: None,
            items: Vec::new(),
        }
    }

    /// Add one pizza to the cart.
    pub fn add_item(&mut self, item: &MenuItem) {
        self.items.push(OrderItem::from(item));
    }

    /// Remove the pizza at `index`, if there is one.
    pub fn remove_item(&mut self, index: usize) -> Option<OrderItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// Response to placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
    /// Signed token the pizza factory issued for this order.
    pub jwt: String,
}

/// A diner's past orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    pub diner_id: UserId,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub page: u32,
}

/// Result of asking the pizza factory to verify an order token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub message: String,
    /// Decoded token claims (vendor, diner, order).
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn veggie() -> MenuItem {
        MenuItem {
            id: MenuId::from("1"),
            title: "Veggie".to_owned(),
            image: "pizza1.png".to_owned(),
            price: Price::new(Decimal::new(38, 4)),
            description: "A garden of delight".to_owned(),
        }
    }

    #[test]
    fn test_cart_building() {
        let mut order = Order::new(FranchiseId::from("2"), StoreId::from("4"));
        assert!(order.is_empty());

        order.add_item(&veggie());
        order.add_item(&veggie());
        assert_eq!(order.total().amount(), Decimal::new(76, 4));
        assert_eq!(order.items[0].description, "Veggie");

        assert!(order.remove_item(5).is_none());
        assert!(order.remove_item(0).is_some());
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_new_order_serializes_without_server_fields() {
        let mut order = Order::new(FranchiseId::from("2"), StoreId::from("4"));
        order.add_item(&veggie());

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "franchiseId": "2",
                "storeId": "4",
                "items": [{"menuId": "1", "description": "Veggie", "price": 0.0038}]
            })
        );
    }

    #[test]
    fn test_order_history() {
        let history: OrderHistory = serde_json::from_str(
            r#"{"dinerId":"3","orders":[{"id":"1","franchiseId":"2","storeId":"4",
                "date":"2024-01-01T00:00:00.000Z",
                "items":[{"menuId":"1","description":"Veggie","price":0.0038}]}],"page":0}"#,
        )
        .unwrap();

        assert_eq!(history.orders.len(), 1);
        assert_eq!(history.orders[0].id, Some(OrderId::from("1")));
        assert!(history.orders[0].date.is_some());
    }
}
