//! CLI errors.

use jwt_pizza_client::{ConfigError, ServiceError};
use jwt_pizza_core::EmailError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A service call failed.
    #[error("Request failed ({}): {}", .0.code(), .0.message())]
    Service(#[from] ServiceError),

    /// An email argument is malformed.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// The command needs a logged-in session.
    #[error("Not logged in. Run `pizza login` first")]
    NotLoggedIn,

    /// An `--item` does not name a menu item.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(String),

    /// Writing the result failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding the result failed.
    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}
