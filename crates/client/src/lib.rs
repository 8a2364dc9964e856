//! JWT Pizza client library.
//!
//! A typed gateway to the pizza service and the pizza factory, plus the
//! session state a front end threads through its views.
//!
//! # Architecture
//!
//! - [`PizzaClient`] is the only component that talks to the network
//! - [`TokenStore`] holds the bearer token and is injected into the client
//! - [`Session`] tracks whether someone is logged in, and as whom
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use jwt_pizza_client::{ClientConfig, FileTokenStore, PizzaClient, Session};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let tokens = Arc::new(FileTokenStore::new(&config.token_path));
//! let mut session = Session::new(PizzaClient::new(&config, tokens)?);
//!
//! if let Some(user) = session.restore().await {
//!     println!("Welcome back, {}", user.name);
//! }
//! let _menu = session.client().get_menu().await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use client::PizzaClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{INTERNAL_ERROR_CODE, ServiceError};
pub use session::{Session, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
