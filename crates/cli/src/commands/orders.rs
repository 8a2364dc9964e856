//! Menu and ordering commands.

use jwt_pizza_client::Session;
use jwt_pizza_core::{FranchiseId, Order, Role, StoreId};
use serde_json::json;

use super::{expect_role, print_json, require_user};
use crate::error::CliError;

/// Print the menu.
pub async fn menu(session: &Session) -> Result<(), CliError> {
    let menu = session.client().get_menu().await?;
    print_json(&menu)
}

/// Build a cart from menu item IDs and place the order.
pub async fn order(
    session: &mut Session,
    franchise: &str,
    store: &str,
    items: &[String],
) -> Result<(), CliError> {
    expect_role(session, Role::Diner).await?;

    let menu = session.client().get_menu().await?;
    let mut cart = Order::new(FranchiseId::from(franchise), StoreId::from(store));
    for wanted in items {
        let item = menu
            .iter()
            .find(|item| item.id.to_string() == *wanted)
            .ok_or_else(|| CliError::UnknownMenuItem(wanted.clone()))?;
        cart.add_item(item);
    }

    tracing::info!("Ordering {} pizzas for {}", cart.items.len(), cart.total());
    let response = session.client().order(&cart).await?;
    print_json(&response)
}

/// Print the logged-in diner's order history.
pub async fn history(session: &mut Session) -> Result<(), CliError> {
    require_user(session).await?;
    let history = session.client().get_orders().await?;
    print_json(&history)
}

/// Verify an order token with the pizza factory.
pub async fn verify(session: &Session, jwt: &str) -> Result<(), CliError> {
    let response = session.client().verify_order(jwt).await?;
    print_json(&json!({
        "valid": response.message == "valid",
        "message": response.message,
        "payload": response.payload,
    }))
}
