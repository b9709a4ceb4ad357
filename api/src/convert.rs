//! Mappings between persisted customer records and their wire shape.

use hub_core::{prelude::*, uuid::Uuid};

use crate::{
    entities::customers,
    error::ResolverError,
    objects::{CreateCustomerInput, Customer, UpdateCustomerInput},
};

impl From<customers::Model> for Customer {
    /// Related job requests, appointments and offers are not loaded.
    fn from(model: customers::Model) -> Self {
        let customers::Model {
            customer_id,
            name_first_name,
            name_last_name,
            customer_email,
            customer_phone_number,
            customer_postal_code,
        } = model;

        debug!(%customer_id, "converted customer record to wire shape");

        Self {
            id: Some(customer_id),
            f_name: name_first_name,
            l_name: name_last_name,
            email: customer_email,
            phone_no: customer_phone_number,
            postal_zip_code: Some(customer_postal_code),
            job_requests: Vec::new(),
            appointments: Vec::new(),
            offers: Vec::new(),
        }
    }
}

/// Builds the record for a new customer under a freshly generated id.
///
/// # Errors
/// Fails with [`ResolverError::Validation`] when a name or the email is blank
/// or `postalZipCode` is missing. Email format and uniqueness are left to the
/// database.
pub fn new_customer(input: CreateCustomerInput) -> Result<customers::Model, ResolverError> {
    let CreateCustomerInput {
        f_name,
        l_name,
        email,
        phone_no,
        postal_zip_code,
    } = input;

    let postal_zip_code =
        postal_zip_code.ok_or_else(|| ResolverError::validation("postalZipCode", "is required"))?;

    Ok(customers::Model {
        customer_id: Uuid::new_v4(),
        name_first_name: required("fName", f_name)?,
        name_last_name: required("lName", l_name)?,
        customer_email: required("email", email)?,
        customer_phone_number: phone_no.unwrap_or_default(),
        customer_postal_code: postal_zip_code,
    })
}

/// Applies the fields present on `input` to `customer`, leaving the rest as stored.
///
/// # Errors
/// Fails with [`ResolverError::Validation`] when a present field would fail
/// the same checks as [`new_customer`].
pub fn apply_update(
    customer: customers::Model,
    input: UpdateCustomerInput,
) -> Result<customers::Model, ResolverError> {
    let customers::Model {
        customer_id,
        name_first_name,
        name_last_name,
        customer_email,
        customer_phone_number,
        customer_postal_code,
    } = customer;
    let UpdateCustomerInput {
        id: _,
        f_name,
        l_name,
        email,
        phone_no,
        postal_zip_code,
    } = input;

    Ok(customers::Model {
        customer_id,
        name_first_name: f_name
            .map(|v| required("fName", v))
            .transpose()?
            .unwrap_or(name_first_name),
        name_last_name: l_name
            .map(|v| required("lName", v))
            .transpose()?
            .unwrap_or(name_last_name),
        customer_email: email
            .map(|v| required("email", v))
            .transpose()?
            .unwrap_or(customer_email),
        customer_phone_number: phone_no.unwrap_or(customer_phone_number),
        customer_postal_code: postal_zip_code.unwrap_or(customer_postal_code),
    })
}

/// Rejects blank values. Accepted values are stored exactly as sent.
fn required(field: &'static str, value: String) -> Result<String, ResolverError> {
    if value.trim().is_empty() {
        return Err(ResolverError::validation(field, "must not be empty"));
    }

    Ok(value)
}
