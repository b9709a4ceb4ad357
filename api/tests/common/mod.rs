#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use hub_core::{serde_json::Value, uuid::Uuid};
use naas_customer_resolver::{
    entities::customers,
    invocation::{Info, Invocation},
    store::{CustomerStore, StoreError},
};
use poem::async_trait;
use sea_orm::DbErr;

/// In-memory store that enforces email uniqueness like the `customers` table.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    rows: Arc<Mutex<HashMap<Uuid, customers::Model>>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<customers::Model> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

fn check_email(
    rows: &HashMap<Uuid, customers::Model>,
    customer: &customers::Model,
) -> Result<(), StoreError> {
    let taken = rows.values().any(|row| {
        row.customer_id != customer.customer_id && row.customer_email == customer.customer_email
    });

    if taken {
        return Err(StoreError::ConstraintViolation(format!(
            "duplicate key value violates unique constraint \"customers_customer_email_key\": {}",
            customer.customer_email
        )));
    }

    Ok(())
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn insert(&self, customer: customers::Model) -> Result<customers::Model, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        check_email(&rows, &customer)?;
        rows.insert(customer.customer_id, customer.clone());

        Ok(customer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<customers::Model>, StoreError> {
        Ok(self.get(id))
    }

    async fn update(&self, customer: customers::Model) -> Result<customers::Model, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&customer.customer_id) {
            return Err(StoreError::Database(DbErr::RecordNotUpdated));
        }
        check_email(&rows, &customer)?;
        rows.insert(customer.customer_id, customer.clone());

        Ok(customer)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        Ok(u64::from(self.rows.lock().unwrap().remove(&id).is_some()))
    }
}

pub fn invocation(parent: &str, field: &str, arguments: Value) -> Invocation {
    Invocation {
        arguments,
        info: Info {
            field_name: field.into(),
            parent_type_name: parent.into(),
            ..Info::default()
        },
        ..Invocation::default()
    }
}
