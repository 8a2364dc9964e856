//! Domain types for JWT Pizza.
//!
//! Every type here mirrors a JSON shape exchanged with the pizza service or
//! the pizza factory.

pub mod docs;
pub mod email;
pub mod franchise;
pub mod id;
pub mod menu;
pub mod order;
pub mod page;
pub mod price;
pub mod role;
pub mod user;

pub use docs::{DocType, Endpoint, Endpoints};
pub use email::{Email, EmailError};
pub use franchise::{Franchise, FranchiseAdmin, FranchiseList, Store};
pub use id::*;
pub use menu::{Menu, MenuItem};
pub use order::{Order, OrderHistory, OrderItem, OrderResponse, VerifyResponse};
pub use page::PageRequest;
pub use price::Price;
pub use role::{Role, RoleAssignment};
pub use user::{User, UserList, UserUpdate};
