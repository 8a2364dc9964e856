//! User administration commands.

use jwt_pizza_client::Session;
use jwt_pizza_core::{PageRequest, Role, UserId, UserList};
use serde_json::json;

use super::{expect_role, print_json};
use crate::error::CliError;

/// Print one page of users, or every page from `page` on.
pub async fn list(session: &mut Session, page: PageRequest, all: bool) -> Result<(), CliError> {
    expect_role(session, Role::Admin).await?;

    let users = if all {
        UserList {
            users: session.client().get_all_users(&page).await?,
            more: false,
        }
    } else {
        session.client().get_users(&page).await?
    };
    print_json(&users)
}

/// Delete a user.
pub async fn delete(session: &mut Session, id: &str) -> Result<(), CliError> {
    let admin = expect_role(session, Role::Admin).await?;

    let id = UserId::from(id);
    if admin.id.same_value(&id) {
        tracing::warn!("Deleting your own account");
    }
    session.client().delete_user(&id).await?;
    print_json(&json!({ "deleted": { "userId": id } }))
}
