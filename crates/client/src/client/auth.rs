//! Authentication: login, registration and logout.
//!
//! Login and registration persist the returned token before resolving.
//! Logout clears the token immediately and notifies the service in the
//! background.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use jwt_pizza_core::{Email, User};

use super::PizzaClient;
use crate::error::ServiceError;

/// Authentication endpoint (PUT login, POST register, DELETE logout).
pub const AUTH_PATH: &str = "/api/auth";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Response to login, registration and user updates.
#[derive(Deserialize)]
pub(super) struct AuthResponse {
    pub(super) user: User,
    pub(super) token: String,
}

impl PizzaClient {
    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` (typically 401) if the credentials are
    /// rejected; nothing is persisted in that case.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &Email, password: &SecretString) -> Result<User, ServiceError> {
        let body = LoginRequest {
            email: email.as_str(),
            password: password.expose_secret(),
        };
        let response: AuthResponse = self.call(AUTH_PATH, Method::PUT, Some(&body)).await?;
        self.persist_token(&response.token)?;

        debug!(user_id = %response.user.id, "Logged in");
        Ok(response.user)
    }

    /// Register a new diner account and log in as it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the service refuses the registration.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        name: &str,
        email: &Email,
        password: &SecretString,
    ) -> Result<User, ServiceError> {
        let body = RegisterRequest {
            name,
            email: email.as_str(),
            password: password.expose_secret(),
        };
        let response: AuthResponse = self.call(AUTH_PATH, Method::POST, Some(&body)).await?;
        self.persist_token(&response.token)?;

        debug!(user_id = %response.user.id, "Registered");
        Ok(response.user)
    }

    /// Log out.
    ///
    /// The `DELETE` request is built with the current token, then the token
    /// is cleared before this returns. The request itself runs as a detached
    /// task; its outcome is only logged. The handle is returned for callers
    /// that want to wait for it, and is `None` when no tokio runtime is
    /// available to run it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the token could not be cleared.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<Option<JoinHandle<()>>, ServiceError> {
        let notify = match self.request::<()>(AUTH_PATH, Method::DELETE, None) {
            Ok(request) => match tokio::runtime::Handle::try_current() {
                Ok(runtime) => Some(runtime.spawn(async move {
                    match Self::execute::<IgnoredAny>(request).await {
                        Ok(_) => debug!("Server session closed"),
                        Err(e) => warn!(code = e.code(), error = %e, "Logout request failed"),
                    }
                })),
                Err(_) => {
                    warn!("No async runtime; skipping logout request");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "Could not build logout request");
                None
            }
        };

        self.tokens().clear()?;
        debug!("Session token cleared");
        Ok(notify)
    }
}
