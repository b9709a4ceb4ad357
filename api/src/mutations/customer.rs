use async_graphql::{Context, ErrorExtensions, Object, Result};
use hub_core::uuid::Uuid;

use crate::{
    invocation::Operation,
    objects::{CreateCustomerInput, Customer, UpdateCustomerInput},
    resolver::CustomerResolver,
};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "CustomerMutation")]
impl Mutation {
    /// Res
    ///
    /// # Errors
    /// This function fails if the input is invalid or the email is already taken
    pub async fn create_customer(
        &self,
        ctx: &Context<'_>,
        create_customer_input: CreateCustomerInput,
    ) -> Result<Customer> {
        run(ctx, Operation::CreateCustomer(create_customer_input)).await
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the customer does not exist or a present field is invalid
    pub async fn update_customer(
        &self,
        ctx: &Context<'_>,
        update_customer_input: UpdateCustomerInput,
    ) -> Result<Customer> {
        run(ctx, Operation::UpdateCustomer(update_customer_input)).await
    }

    /// Returns an empty customer once the row is gone.
    ///
    /// # Errors
    /// This function fails if the database rejects the delete
    pub async fn delete_customer(&self, ctx: &Context<'_>, id: Uuid) -> Result<Customer> {
        run(ctx, Operation::DeleteCustomer { id }).await
    }
}

async fn run(ctx: &Context<'_>, operation: Operation) -> Result<Customer> {
    let resolver = ctx.data::<CustomerResolver>()?;

    resolver.resolve(operation).await.map_err(|e| e.extend())
}
