//! Franchise and store commands.

use jwt_pizza_client::Session;
use jwt_pizza_core::{Email, Franchise, FranchiseId, FranchiseList, PageRequest, Role, Store, StoreId};
use serde_json::json;

use super::{expect_role, print_json, require_user};
use crate::error::CliError;

/// Print the franchises the logged-in user administers.
pub async fn mine(session: &mut Session) -> Result<(), CliError> {
    let user = require_user(session).await?;
    let franchises = session.client().get_franchise(&user.id).await?;
    print_json(&franchises)
}

/// Print one page of franchises, or every page from `page` on.
pub async fn list(session: &Session, page: PageRequest, all: bool) -> Result<(), CliError> {
    let franchises = if all {
        FranchiseList {
            franchises: session.client().get_all_franchises(&page).await?,
            more: false,
        }
    } else {
        session.client().get_franchises(&page).await?
    };
    print_json(&franchises)
}

/// Create a franchise administered by the given franchisees.
pub async fn create(session: &mut Session, name: &str, admins: &[String]) -> Result<(), CliError> {
    expect_role(session, Role::Admin).await?;

    let admins = admins
        .iter()
        .map(|email| Email::parse(email))
        .collect::<Result<Vec<_>, _>>()?;
    let created = session
        .client()
        .create_franchise(&Franchise::new(name, admins))
        .await?;
    print_json(&created)
}

/// Close a franchise.
pub async fn close(session: &mut Session, id: &str) -> Result<(), CliError> {
    expect_role(session, Role::Admin).await?;

    let id = FranchiseId::from(id);
    session.client().close_franchise(&id).await?;
    print_json(&json!({ "closed": { "franchiseId": id } }))
}

/// Open a store under a franchise.
pub async fn create_store(session: &mut Session, franchise: &str, name: &str) -> Result<(), CliError> {
    expect_role(session, Role::Franchisee).await?;

    let created = session
        .client()
        .create_store(&FranchiseId::from(franchise), &Store::named(name))
        .await?;
    print_json(&created)
}

/// Close a store.
pub async fn close_store(session: &mut Session, franchise: &str, store: &str) -> Result<(), CliError> {
    expect_role(session, Role::Franchisee).await?;

    let franchise_id = FranchiseId::from(franchise);
    let store_id = StoreId::from(store);
    session
        .client()
        .close_store(&franchise_id, &store_id)
        .await?;
    print_json(&json!({ "closed": { "franchiseId": franchise_id, "storeId": store_id } }))
}
