//! GraphQL output types.

use async_graphql::{Object, ID};

use crate::types::{Address, Person};

/// A contact in the list.
#[Object]
impl Person {
    async fn name(&self) -> &str {
        &self.name
    }

    async fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Address built from the stored street and city
    #[graphql(name = "address")]
    async fn resolve_address(&self) -> Address {
        self.address()
    }

    async fn id(&self) -> ID {
        ID::from(self.id.as_str())
    }
}
