//! User roles.

use serde::{Deserialize, Serialize};

/// A role a user holds in the pizza service.
///
/// A user may hold several roles at once; a franchisee assignment is scoped
/// to one franchise through [`RoleAssignment::object_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Orders pizza.
    Diner,
    /// Manages the stores of one or more franchises.
    Franchisee,
    /// Manages franchises and users.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Diner => write!(f, "diner"),
            Self::Franchisee => write!(f, "franchisee"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diner" => Ok(Self::Diner),
            "franchisee" => Ok(Self::Franchisee),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// One entry of a user's `roles` array, e.g. `{"role": "franchisee", "objectId": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role: Role,
    /// Franchise the role applies to, for franchisees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<super::FranchiseId>,
}

impl RoleAssignment {
    /// An unscoped assignment.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            object_id: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let roles: Vec<RoleAssignment> =
            serde_json::from_str(r#"[{"role":"diner"},{"role":"franchisee","objectId":2}]"#)
                .unwrap();

        assert_eq!(roles[0], RoleAssignment::new(Role::Diner));
        assert_eq!(roles[1].role, Role::Franchisee);
        assert_eq!(roles[1].object_id, Some(super::super::FranchiseId::from(2)));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("owner".parse::<Role>().is_err());
        assert_eq!(Role::Franchisee.to_string(), "franchisee");
    }
}
