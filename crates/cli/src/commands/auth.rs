//! Session commands.

use jwt_pizza_client::Session;
use jwt_pizza_core::{Email, UserUpdate};
use secrecy::SecretString;
use serde_json::json;

use super::{print_json, require_user};
use crate::error::CliError;

/// Log in and print the user.
pub async fn login(session: &mut Session, email: &str, password: String) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let user = session
        .login(&email, &SecretString::from(password))
        .await?;

    tracing::info!("Logged in as {} ({})", user.name, user.initials());
    print_json(&user)
}

/// Register, log in and print the new user.
pub async fn register(
    session: &mut Session,
    name: &str,
    email: &str,
    password: String,
) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let user = session
        .register(name, &email, &SecretString::from(password))
        .await?;

    tracing::info!("Registered {}", user.email);
    print_json(&user)
}

/// Forget the session, waiting for the service to be told.
pub async fn logout(session: &mut Session) -> Result<(), CliError> {
    // The process exits right after, so wait for the notification rather
    // than letting runtime shutdown cancel it.
    if let Some(notify) = session.logout()? {
        let _ = notify.await;
    }

    tracing::info!("Logged out");
    print_json(&json!({ "loggedIn": false }))
}

/// Print the logged-in user, or `null`.
pub async fn whoami(session: &mut Session) -> Result<(), CliError> {
    let user = session.restore().await;
    print_json(&user)
}

/// Apply the given profile changes to the logged-in user.
pub async fn update_user(
    session: &mut Session,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), CliError> {
    let current = require_user(session).await?;

    let mut update = UserUpdate::from(&current);
    if let Some(name) = name {
        update.name = name;
    }
    if let Some(email) = email {
        update.email = Email::parse(&email)?;
    }
    update.password = password;

    let user = session.update_user(&update).await?;
    print_json(&user)
}
