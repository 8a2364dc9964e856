//! The pizza menu.

use serde::{Deserialize, Serialize};

use super::{MenuId, Price};

/// A pizza on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuId,
    pub title: String,
    /// Image file name relative to the storefront's asset root.
    pub image: String,
    pub price: Price,
    pub description: String,
}

/// The full menu, in display order.
pub type Menu = Vec<MenuItem>;
