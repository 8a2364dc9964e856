//! Entity identifiers.
//!
//! Each entity gets its own ID type, so a store ID cannot be passed where a
//! franchise ID is expected.
//!
//! The pizza service is not consistent about how it encodes identifiers:
//! some responses carry `"id": 3`, others `"id": "3"`. Every ID therefore
//! wraps a [`RawId`] that accepts both and writes back whichever form it
//! was read in, so values echoed to the server are unchanged.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An identifier as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Integer identifier, e.g. `23`.
    Number(i64),
    /// String identifier, e.g. `"23"`.
    Text(String),
}

impl RawId {
    /// Whether both name the same identifier, ignoring whether each was
    /// written as a number or a string.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(n), Self::Text(t)) | (Self::Text(t), Self::Number(n)) => {
                t.parse::<i64>().is_ok_and(|parsed| parsed == *n)
            }
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Declare an ID type wrapping [`RawId`].
///
/// The type is serde-transparent, displays as the bare value (that is what
/// goes into URL paths) and converts from integers and strings.
///
/// ```rust
/// # use jwt_pizza_core::define_id;
/// define_id!(KitchenId);
/// define_id!(OvenId);
///
/// let kitchen = KitchenId::from(7);
/// let oven = OvenId::from("7");
/// assert_eq!(kitchen.to_string(), oven.to_string());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($crate::types::id::RawId);

        impl $name {
            /// Get the identifier as it was received.
            #[must_use]
            pub const fn raw(&self) -> &$crate::types::id::RawId {
                &self.0
            }

            /// Equality across wire forms: `1` and `"1"` match.
            #[must_use]
            pub fn same_value(&self, other: &Self) -> bool {
                self.0.same_value(&other.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self($crate::types::id::RawId::Number(id))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self($crate::types::id::RawId::Text(id.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self($crate::types::id::RawId::Text(id))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }
    };
}

define_id!(UserId);
define_id!(MenuId);
define_id!(OrderId);
define_id!(FranchiseId);
define_id!(StoreId);
