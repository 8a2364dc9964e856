//! API documentation listings.

use serde::{Deserialize, Serialize};

/// Which service to ask for its endpoint listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocType {
    /// The pizza service.
    #[default]
    Service,
    /// The pizza factory.
    Factory,
}

impl std::str::FromStr for DocType {
    type Err = std::convert::Infallible;

    /// `"factory"` selects the factory; anything else selects the service.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "factory" {
            Self::Factory
        } else {
            Self::Service
        })
    }
}

/// One documented route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_auth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

/// A service's endpoint listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_type_from_flag() {
        assert_eq!("factory".parse::<DocType>().unwrap(), DocType::Factory);
        assert_eq!("service".parse::<DocType>().unwrap(), DocType::Service);
        assert_eq!("".parse::<DocType>().unwrap(), DocType::Service);
    }

    #[test]
    fn test_factory_listing_without_version() {
        let docs: Endpoints =
            serde_json::from_str(r#"{"endpoints":[{"method":"POST","path":"/verify"}]}"#).unwrap();
        assert!(docs.version.is_none());
        assert_eq!(docs.endpoints[0].path, "/verify");
        assert!(docs.endpoints[0].description.is_none());
    }
}
