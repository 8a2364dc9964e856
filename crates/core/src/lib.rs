//! JWT Pizza Core - Shared domain types.
//!
//! This crate provides the types exchanged with the JWT Pizza services:
//! - `jwt-pizza-client` - HTTP gateway and session state
//! - `jwt-pizza-cli` - Command-line storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every type
//! round-trips through the JSON shapes the services speak.
//!
//! # Modules
//!
//! - [`types`] - IDs, emails, prices, roles, users, menu, orders, franchises, docs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
