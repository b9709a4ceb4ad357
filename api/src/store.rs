use hub_core::{prelude::*, uuid::Uuid};
use poem::async_trait;
use sea_orm::{prelude::*, sqlx, RuntimeErr, Set};

use crate::{
    db::Connection,
    entities::{customers, prelude::Customers},
};

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique index rejected the write, e.g. a second customer with the same email.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match unique_violation(&err) {
            Some(message) => Self::ConstraintViolation(message),
            None => Self::Database(err),
        }
    }
}

fn unique_violation(err: &DbErr) -> Option<String> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e)))) = err
    else {
        return None;
    };

    (e.code().as_deref() == Some(UNIQUE_VIOLATION)).then(|| e.message().to_owned())
}

/// Persistence operations the resolver needs. Each call is a single
/// autocommitted statement.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn insert(&self, customer: customers::Model) -> Result<customers::Model, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<customers::Model>, StoreError>;

    /// Overwrites every column of the row keyed by `customer.customer_id`.
    async fn update(&self, customer: customers::Model) -> Result<customers::Model, StoreError>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64, StoreError>;
}

#[derive(Debug, Clone)]
pub struct DbCustomerStore {
    db: Connection,
}

impl DbCustomerStore {
    #[must_use]
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

fn active_model(customer: customers::Model) -> customers::ActiveModel {
    let customers::Model {
        customer_id,
        name_first_name,
        name_last_name,
        customer_email,
        customer_phone_number,
        customer_postal_code,
    } = customer;

    customers::ActiveModel {
        customer_id: Set(customer_id),
        name_first_name: Set(name_first_name),
        name_last_name: Set(name_last_name),
        customer_email: Set(customer_email),
        customer_phone_number: Set(customer_phone_number),
        customer_postal_code: Set(customer_postal_code),
    }
}

#[async_trait]
impl CustomerStore for DbCustomerStore {
    async fn insert(&self, customer: customers::Model) -> Result<customers::Model, StoreError> {
        let customer = active_model(customer).insert(self.db.get()).await?;

        debug!(customer_id = %customer.customer_id, "customer inserted");

        Ok(customer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<customers::Model>, StoreError> {
        Customers::find_by_id(id)
            .one(self.db.get())
            .await
            .map_err(Into::into)
    }

    async fn update(&self, customer: customers::Model) -> Result<customers::Model, StoreError> {
        active_model(customer)
            .update(self.db.get())
            .await
            .map_err(Into::into)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let res = Customers::delete_by_id(id).exec(self.db.get()).await?;

        Ok(res.rows_affected)
    }
}
