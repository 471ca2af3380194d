//! GraphQL API for the contact list.
//!
//! ## Example
//!
//! ```graphql
//! { count list(phoneFilter: NO_PHONE) { name address { city } } }
//!
//! mutation { add(name: "Ana", street: "calle 5", city: "Cali") { id } }
//! ```

pub mod mutation;
pub mod query;
mod types;

use async_graphql::{Context, EmptySubscription, Schema};
use std::sync::Arc;

use crate::service::ContactService;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The contacts GraphQL schema type.
pub type ContactsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the contact service as context.
pub fn build_schema(service: Arc<ContactService>) -> ContactsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Execute a GraphQL query and return the JSON response.
pub async fn execute(schema: &ContactsSchema, query: &str) -> String {
    let result = schema.execute(query).await;
    serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
}

fn contacts<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<ContactService>> {
    ctx.data::<Arc<ContactService>>()
}
