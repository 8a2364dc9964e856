//! Who is logged in, and as whom.
//!
//! ```text
//! Anonymous --login/register--> Authenticated(user)
//! Authenticated --logout | failed identity check | failed update--> Anonymous
//! ```
//!
//! Role checks here only decide what to offer the user. The services make
//! every authorization decision.

use secrecy::SecretString;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use jwt_pizza_core::{Email, Role, User, UserUpdate};

use crate::client::PizzaClient;
use crate::error::ServiceError;

/// Session state. Requests in flight are not represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

/// The session of one interactive front end.
#[derive(Debug)]
pub struct Session {
    client: PizzaClient,
    state: SessionState,
}

impl Session {
    /// A logged-out session. Call [`restore`](Self::restore) to pick up a
    /// persisted token.
    #[must_use]
    pub const fn new(client: PizzaClient) -> Self {
        Self {
            client,
            state: SessionState::Anonymous,
        }
    }

    #[must_use]
    pub const fn client(&self) -> &PizzaClient {
        &self.client
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Whether the logged-in user holds `role`. Always false when anonymous.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.user().is_some_and(|user| user.has_role(role))
    }

    /// Resume a persisted session.
    ///
    /// Checks the stored token against the service with the stored token; a missing or rejected
    /// token leaves the session anonymous.
    pub async fn restore(&mut self) -> Option<&User> {
        self.state = match self.client.get_user().await {
            Some(user) => {
                info!(user_id = %user.id, "Session restored");
                SessionState::Authenticated(user)
            }
            None => SessionState::Anonymous,
        };
        self.user()
    }

    /// Log in. On failure the session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the service error, e.g. 401 for bad credentials.
    pub async fn login(&mut self, email: &Email, password: &SecretString) -> Result<User, ServiceError> {
        let user = self.client.login(email, password).await?;
        Ok(self.authenticate(user))
    }

    /// Register and log in. On failure the session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the service error.
    pub async fn register(
        &mut self,
        name: &str,
        email: &Email,
        password: &SecretString,
    ) -> Result<User, ServiceError> {
        let user = self.client.register(name, email, password).await?;
        Ok(self.authenticate(user))
    }

    /// Update the logged-in user's profile.
    ///
    /// A failed update ends the session: the token is cleared and the
    /// session becomes anonymous before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the service error.
    pub async fn update_user(&mut self, update: &UserUpdate) -> Result<User, ServiceError> {
        match self.client.update_user(update).await {
            Ok(user) => Ok(self.authenticate(user)),
            Err(e) => {
                warn!(code = e.code(), error = %e, "Profile update failed; ending session");
                if let Err(clear) = self.client.tokens().clear() {
                    warn!(error = %clear, "Could not clear session token");
                }
                self.state = SessionState::Anonymous;
                Err(e)
            }
        }
    }

    /// Log out. The session is anonymous when this returns, whatever
    /// happens to the background request.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the token could not be cleared; the
    /// in-memory session is anonymous either way.
    pub fn logout(&mut self) -> Result<Option<JoinHandle<()>>, ServiceError> {
        self.state = SessionState::Anonymous;
        self.client.logout()
    }

    fn authenticate(&mut self, user: User) -> User {
        info!(user_id = %user.id, "Session authenticated");
        self.state = SessionState::Authenticated(user.clone());
        user
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use url::Url;

    use super::*;
    use crate::config::ClientConfig;
    use crate::store::{MemoryTokenStore, TokenStore};

    fn session() -> Session {
        let config = ClientConfig::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            Url::parse("http://127.0.0.1:9").unwrap(),
        );
        Session::new(PizzaClient::new(&config, Arc::new(MemoryTokenStore::new())).unwrap())
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = session();
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(!session.is_authenticated());
        assert!(!session.has_role(Role::Diner));
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_restore_without_token_stays_anonymous() {
        let mut session = session();
        assert!(session.restore().await.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_without_runtime_still_clears() {
        let mut session = session();
        session.client().tokens().save("abcdef").unwrap();

        let handle = session.logout().unwrap();
        assert!(handle.is_none());
        assert!(session.client().tokens().load().unwrap().is_none());
    }
}
