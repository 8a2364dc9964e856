//! Command implementations.

pub mod auth;
pub mod docs;
pub mod franchises;
pub mod orders;
pub mod users;

use std::io::Write;

use jwt_pizza_client::Session;
use jwt_pizza_core::{Role, User};
use serde::Serialize;

use crate::error::CliError;

/// Print a value to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Resume the persisted session, failing if nobody is logged in.
pub async fn require_user(session: &mut Session) -> Result<User, CliError> {
    session.restore().await.cloned().ok_or(CliError::NotLoggedIn)
}

/// Resume the session and warn when it lacks `role`.
///
/// The request is still sent: the service decides.
pub async fn expect_role(session: &mut Session, role: Role) -> Result<User, CliError> {
    let user = require_user(session).await?;
    if !user.has_role(role) {
        tracing::warn!(%role, "You do not hold the required role; the service will likely refuse");
    }
    Ok(user)
}
