//! The current user and user administration.

use reqwest::Method;
use serde::Serialize;
use serde::de::IgnoredAny;
use tracing::{debug, instrument, warn};

use jwt_pizza_core::{PageRequest, User, UserId, UserList, UserUpdate};

use super::auth::AuthResponse;
use super::{PizzaClient, segment};
use crate::error::ServiceError;

/// Identity endpoint.
pub const ME_PATH: &str = "/api/user/me";

/// User collection endpoint.
pub const USER_PATH: &str = "/api/user";

#[derive(Serialize)]
struct UpdateUserRequest<'a> {
    id: &'a UserId,
    name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

impl<'a> From<&'a UserUpdate> for UpdateUserRequest<'a> {
    fn from(update: &'a UserUpdate) -> Self {
        Self {
            id: &update.id,
            name: &update.name,
            email: update.email.as_str(),
            password: update.password.as_deref(),
        }
    }
}

impl PizzaClient {
    /// The user the stored token belongs to.
    ///
    /// Without a stored token this returns `None` and sends nothing. If the
    /// check fails for any reason the token is treated as expired: it is
    /// cleared and `None` is returned instead of an error.
    #[instrument(skip(self))]
    pub async fn get_user(&self) -> Option<User> {
        self.current_token()?;

        match self.get::<Option<User>>(ME_PATH).await {
            Ok(user) => user,
            Err(e) => {
                warn!(code = e.code(), error = %e, "Identity check failed; dropping session token");
                if let Err(e) = self.tokens().clear() {
                    warn!(error = %e, "Could not clear session token");
                }
                None
            }
        }
    }

    /// Update a user's profile. The service re-issues the session token,
    /// which is persisted before this returns.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the service refuses the update.
    #[instrument(skip(self, update), fields(user_id = %update.id))]
    pub async fn update_user(&self, update: &UserUpdate) -> Result<User, ServiceError> {
        let path = format!("{USER_PATH}/{}", segment(&update.id));
        let body = UpdateUserRequest::from(update);

        let response: AuthResponse = self.call(&path, Method::PUT, Some(&body)).await?;
        self.persist_token(&response.token)?;

        debug!("User updated");
        Ok(response.user)
    }

    /// Delete a user (admin only).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the service refuses the deletion.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &UserId) -> Result<(), ServiceError> {
        let path = format!("{USER_PATH}/{}", segment(user_id));
        self.call::<IgnoredAny, ()>(&path, Method::DELETE, None)
            .await?;
        Ok(())
    }

    /// One page of users matching the name filter (admin only).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the service refuses the listing.
    #[instrument(skip(self))]
    pub async fn get_users(&self, page: &PageRequest) -> Result<UserList, ServiceError> {
        self.get(&paged(USER_PATH, page)).await
    }

    /// Every user matching the filter, following `more` from `first`
    /// (admin only).
    ///
    /// # Errors
    ///
    /// Returns the first failing page's error.
    #[instrument(skip(self))]
    pub async fn get_all_users(&self, first: &PageRequest) -> Result<Vec<User>, ServiceError> {
        let mut page = first.clone();
        let mut users = Vec::new();
        loop {
            let list = self.get_users(&page).await?;
            let fetched = list.users.len();
            users.extend(list.users);
            if !list.more || fetched == 0 {
                return Ok(users);
            }
            page = page.next();
        }
    }
}

/// `path?page=..&limit=..&name=..`
pub(super) fn paged(path: &str, page: &PageRequest) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(page.query_pairs())
        .finish();
    format!("{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_query() {
        assert_eq!(
            paged(USER_PATH, &PageRequest::default()),
            "/api/user?page=0&limit=10&name=*"
        );
        assert_eq!(
            paged(USER_PATH, &PageRequest::new(3).page(2).name("Kai Chen")),
            "/api/user?page=2&limit=3&name=Kai+Chen"
        );
    }
}
