use async_graphql::{Context, ErrorExtensions, Object, Result};
use hub_core::uuid::Uuid;

use crate::{invocation::Operation, objects::Customer, resolver::CustomerResolver};

#[derive(Default)]
pub struct Query;

#[Object(name = "CustomerQuery")]
impl Query {
    /// Fetches a single customer by id.
    ///
    /// # Errors
    /// This function fails if no customer has the given id or the database is unreachable
    async fn customer(&self, ctx: &Context<'_>, customer_id: Uuid) -> Result<Customer> {
        let resolver = ctx.data::<CustomerResolver>()?;

        resolver
            .resolve(Operation::Customer { customer_id })
            .await
            .map_err(|e| e.extend())
    }
}
