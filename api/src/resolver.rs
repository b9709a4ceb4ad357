use std::sync::Arc;

use hub_core::{prelude::*, uuid::Uuid};
use sea_orm::DbErr;

use crate::{
    convert,
    error::ResolverError,
    invocation::{Invocation, Operation},
    objects::{CreateCustomerInput, Customer, UpdateCustomerInput},
    store::{CustomerStore, StoreError},
};

/// Resolves one customer field per call. Holds no state besides the store.
#[derive(Clone)]
pub struct CustomerResolver {
    store: Arc<dyn CustomerStore>,
}

impl CustomerResolver {
    #[must_use]
    pub fn new(store: impl CustomerStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Decodes a gateway invocation and runs the operation it names.
    ///
    /// # Errors
    /// Returns every decoding, validation and persistence failure unchanged.
    pub async fn handle(&self, invocation: Invocation) -> Result<Customer, ResolverError> {
        let Invocation {
            arguments,
            identity,
            info,
            ..
        } = invocation;

        if let Some(identity) = identity {
            debug!(sub = ?identity.sub, username = ?identity.username, "caller identity");
        }

        info!(
            parent_type = %info.parent_type_name,
            field_name = %info.field_name,
            "customer invocation received"
        );

        let operation = Operation::decode(&info, arguments)?;

        self.resolve(operation).await
    }

    /// # Errors
    /// Returns every validation and persistence failure unchanged.
    pub async fn resolve(&self, operation: Operation) -> Result<Customer, ResolverError> {
        debug!(field_name = operation.field_name(), "resolving customer operation");

        match operation {
            Operation::Customer { customer_id } => self.customer(customer_id).await,
            Operation::CreateCustomer(input) => self.create_customer(input).await,
            Operation::UpdateCustomer(input) => self.update_customer(input).await,
            Operation::DeleteCustomer { id } => self.delete_customer(id).await,
        }
    }

    async fn customer(&self, id: Uuid) -> Result<Customer, ResolverError> {
        let customer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ResolverError::NotFound(id))?;

        Ok(customer.into())
    }

    async fn create_customer(&self, input: CreateCustomerInput) -> Result<Customer, ResolverError> {
        let customer = convert::new_customer(input)?;
        let customer = self.store.insert(customer).await?;

        info!(customer_id = %customer.customer_id, "customer created");

        Ok(customer.into())
    }

    async fn update_customer(&self, input: UpdateCustomerInput) -> Result<Customer, ResolverError> {
        let id = input.id;
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ResolverError::NotFound(id))?;

        let customer = convert::apply_update(existing, input)?;
        let customer = match self.store.update(customer).await {
            // deleted between the lookup and the update
            Err(StoreError::Database(DbErr::RecordNotUpdated)) => {
                return Err(ResolverError::NotFound(id));
            },
            res => res?,
        };

        info!(customer_id = %id, "customer updated");

        Ok(customer.into())
    }

    async fn delete_customer(&self, id: Uuid) -> Result<Customer, ResolverError> {
        let rows = self.store.delete(id).await?;

        if rows == 0 {
            warn!(customer_id = %id, "delete matched no customer");
        } else {
            info!(customer_id = %id, "customer deleted");
        }

        Ok(Customer::default())
    }
}
