//! Users as returned by the pizza service.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Email, Role, RoleAssignment, UserId};

/// An authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

impl User {
    /// Whether the user holds `role` in any scope.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }

    /// The distinct roles the user holds.
    #[must_use]
    pub fn roles(&self) -> BTreeSet<Role> {
        self.roles.iter().map(|r| r.role).collect()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Upper-cased first letter of each word of the name ("Kai Chen" -> "KC").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Changes submitted for an existing user.
///
/// `password` is left out of the request when `None`, which keeps the
/// current password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub password: Option<String>,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: None,
        }
    }
}

/// One page of the admin user listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
    pub more: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn kai() -> User {
        serde_json::from_str(
            r#"{"id":"3","name":"Kai Chen","email":"d@jwt.com","roles":[{"role":"diner"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_role_queries() {
        let mut user = kai();
        assert!(user.has_role(Role::Diner));
        assert!(!user.is_admin());

        user.roles.push(RoleAssignment::new(Role::Admin));
        user.roles.push(RoleAssignment::new(Role::Diner));
        assert!(user.is_admin());
        assert_eq!(
            user.roles().into_iter().collect::<Vec<_>>(),
            vec![Role::Diner, Role::Admin]
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(kai().initials(), "KC");

        let mut user = kai();
        user.name = "pizza  franchisee".to_owned();
        assert_eq!(user.initials(), "PF");
    }

    #[test]
    fn test_missing_roles_default_to_empty() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Admin User","email":"a@jwt.com"}"#).unwrap();
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_update_from_user_keeps_password() {
        let update = UserUpdate::from(&kai());
        assert_eq!(update.id, UserId::from("3"));
        assert!(update.password.is_none());
    }
}
