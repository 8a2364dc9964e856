//! Franchises and their stores.

use serde::{Deserialize, Serialize};

use super::{Email, FranchiseId, Price, StoreId, UserId};

/// A franchisee listed as administrator of a franchise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseAdmin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: Email,
}

/// A store belonging to a franchise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StoreId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub franchise_id: Option<FranchiseId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<Price>,
}

impl Store {
    /// A store that has not been created yet.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            franchise_id: None,
            name: name.into(),
            total_revenue: None,
        }
    }
}

/// An organizational owner of stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Franchise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FranchiseId>,
    pub name: String,
    #[serde(default)]
    pub admins: Vec<FranchiseAdmin>,
    #[serde(default)]
    pub stores: Vec<Store>,
}

impl Franchise {
    /// A franchise that has not been created yet, administered by `admins`.
    #[must_use]
    pub fn new(name: impl Into<String>, admins: impl IntoIterator<Item = Email>) -> Self {
        Self {
            id: None,
            name: name.into(),
            admins: admins
                .into_iter()
                .map(|email| FranchiseAdmin {
                    id: None,
                    name: None,
                    email,
                })
                .collect(),
            stores: Vec::new(),
        }
    }

    /// Revenue summed over all stores.
    #[must_use]
    pub fn total_revenue(&self) -> Price {
        self.stores.iter().filter_map(|s| s.total_revenue).sum()
    }
}

/// One page of the franchise listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseList {
    pub franchises: Vec<Franchise>,
    pub more: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_franchise_list() {
        let list: FranchiseList = serde_json::from_str(
            r#"{"franchises":[
                {"id":"2","name":"LotaPizza",
                 "admins":[{"email":"f@jwt.com","id":"4","name":"Pizza Franchisee"}],
                 "stores":[{"id":"4","name":"Lehi","totalRevenue":100},
                           {"id":"5","name":"Springville","totalRevenue":200}]},
                {"id":"4","name":"topSpot","stores":[]}],
              "more":false}"#,
        )
        .unwrap();

        assert_eq!(list.franchises.len(), 2);
        assert!(!list.more);
        assert_eq!(
            list.franchises[0].total_revenue().amount(),
            Decimal::from(300)
        );
        assert!(list.franchises[1].admins.is_empty());
        assert_eq!(list.franchises[1].total_revenue(), Price::ZERO);
    }

    #[test]
    fn test_new_franchise_body() {
        let franchise = Franchise::new("pizzaPocket", [Email::parse("f@jwt.com").unwrap()]);
        assert_eq!(
            serde_json::to_value(&franchise).unwrap(),
            serde_json::json!({
                "name": "pizzaPocket",
                "admins": [{"email": "f@jwt.com"}],
                "stores": []
            })
        );
    }

    #[test]
    fn test_new_store_body() {
        assert_eq!(
            serde_json::to_value(Store::named("SLC")).unwrap(),
            serde_json::json!({"name": "SLC"})
        );
    }
}
