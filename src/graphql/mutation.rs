//! GraphQL mutation resolvers.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::contacts;
use crate::types::{NewPerson, Person};

/// Root mutation object.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a person. Fails with BAD_USER_INPUT when the name is taken.
    async fn add(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Result<Option<Person>> {
        contacts(ctx)?
            .add(NewPerson::new(name, phone, street, city))
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// Replace a person's phone number. Null when no person has that name.
    async fn edit_phone(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> Result<Option<Person>> {
        Ok(contacts(ctx)?.edit_phone(&name, phone).await)
    }
}
