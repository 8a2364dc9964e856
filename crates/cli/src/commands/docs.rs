//! Endpoint listings.

use jwt_pizza_client::Session;
use jwt_pizza_core::DocType;

use super::print_json;
use crate::error::CliError;

/// Print the endpoint listing of the service, or of the factory.
pub async fn list(session: &Session, factory: bool) -> Result<(), CliError> {
    let doc_type = if factory {
        DocType::Factory
    } else {
        DocType::Service
    };
    let docs = session.client().docs(doc_type).await?;
    print_json(&docs)
}
