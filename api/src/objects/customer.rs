use async_graphql::{InputObject, SimpleObject};
use hub_core::uuid::Uuid;
use serde::{Deserialize, Serialize};

use super::{Appointment, JobRequest, Offer};

/// A customer as returned to the GraphQL gateway.
///
/// The related collections are part of the published type but this service
/// never loads them; they are always empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Published as a nullable `UUID` so `deleteCustomer` can answer with
    /// `null` instead of an empty-string id. Always set on every other result.
    pub id: Option<Uuid>,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    pub phone_no: String,
    pub postal_zip_code: Option<String>,
    pub job_requests: Vec<JobRequest>,
    pub appointments: Vec<Appointment>,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerInput {
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    /// Defaults to an empty string when omitted.
    pub phone_no: Option<String>,
    /// Required by the persisted record even though the schema marks it optional.
    pub postal_zip_code: Option<String>,
}

/// Partial update of an existing customer. Only present fields are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerInput {
    pub id: Uuid,
    pub f_name: Option<String>,
    pub l_name: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub postal_zip_code: Option<String>,
}
