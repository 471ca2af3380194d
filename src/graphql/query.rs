//! GraphQL query resolvers.

use async_graphql::{Context, Object, Result};

use super::contacts;
use crate::types::{Person, PhoneFilter};

/// Root query object.
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Number of persons in the contact list
    async fn count(&self, ctx: &Context<'_>) -> Result<usize> {
        Ok(contacts(ctx)?.count().await)
    }

    /// All persons in insertion order, optionally filtered by phone presence
    async fn list(
        &self,
        ctx: &Context<'_>,
        phone_filter: Option<PhoneFilter>,
    ) -> Result<Vec<Option<Person>>> {
        // nullable items keep the published `[Person]!` shape
        let persons = contacts(ctx)?.list(phone_filter).await;
        Ok(persons.into_iter().map(Some).collect())
    }

    /// Person with exactly this name, or null
    async fn find_by_name(&self, ctx: &Context<'_>, name: String) -> Result<Option<Person>> {
        Ok(contacts(ctx)?.find_by_name(&name).await)
    }
}
