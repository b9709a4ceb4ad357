use std::str::FromStr;

use async_graphql::Enum;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A wire value that is not a member of its closed enum.
///
/// Raised from inside serde decoding, so callers see it wrapped in the
/// `serde_json::Error` that becomes [`ResolverError::MalformedInput`]; the
/// message still names the value and the enum. No customer operation takes
/// an enum argument yet, so today it only guards the nested wire objects.
///
/// [`ResolverError::MalformedInput`]: crate::error::ResolverError::MalformedInput
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{value}\" is not a valid {kind}")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
}

fn parse<T: FromStr>(kind: &'static str, value: &str) -> Result<T, InvalidEnumValue> {
    T::from_str(value).map_err(|_| InvalidEnumValue {
        kind,
        value: value.to_owned(),
    })
}

/// Lifecycle of a booked appointment between a customer and a worker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Enum,
    strum::EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(try_from = "String", into = "String")]
pub enum AppointmentStatus {
    #[sea_orm(string_value = "UPCOMING")]
    Upcoming,
    #[sea_orm(string_value = "CUSTOMER_CANCELLED")]
    CustomerCancelled,
    #[sea_orm(string_value = "WORKER_CANCELED")]
    WorkerCanceled,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CUSTOMER_NO_SHOW_UP")]
    CustomerNoShowUp,
    /// The misspelling is part of the published schema.
    #[graphql(name = "WORER_NO_SHOW_UP")]
    #[sea_orm(string_value = "WORER_NO_SHOW_UP")]
    #[strum(serialize = "WORER_NO_SHOW_UP")]
    WorkerNoShowUp,
}

impl TryFrom<String> for AppointmentStatus {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse("AppointmentStatus", &value)
    }
}

impl From<AppointmentStatus> for String {
    fn from(value: AppointmentStatus) -> Self {
        value.to_string()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Enum,
    strum::EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(try_from = "String", into = "String")]
pub enum JobStatus {
    #[sea_orm(string_value = "CREATED")]
    Created,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "CUSTOMER_CANCELED")]
    CustomerCanceled,
    #[graphql(name = "WORKER_CALNCELED")]
    #[sea_orm(string_value = "WORKER_CALNCELED")]
    #[strum(serialize = "WORKER_CALNCELED")]
    WorkerCanceled,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CLIENT_DIDNT_SHOW_UP")]
    ClientDidntShowUp,
    #[sea_orm(string_value = "WORKER_DIDNT_SHOW_UP")]
    WorkerDidntShowUp,
}

impl TryFrom<String> for JobStatus {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse("JobStatus", &value)
    }
}

impl From<JobStatus> for String {
    fn from(value: JobStatus) -> Self {
        value.to_string()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Enum,
    strum::EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(try_from = "String", into = "String")]
pub enum OfferStatus {
    #[sea_orm(string_value = "SENT")]
    Sent,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[graphql(name = "COMPELTED")]
    #[sea_orm(string_value = "COMPELTED")]
    #[strum(serialize = "COMPELTED")]
    Completed,
    #[sea_orm(string_value = "CANCELED")]
    Canceled,
}

impl TryFrom<String> for OfferStatus {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse("OfferStatus", &value)
    }
}

impl From<OfferStatus> for String {
    fn from(value: OfferStatus) -> Self {
        value.to_string()
    }
}

/// Trade a worker is registered for, also used to route job requests.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Enum,
    strum::EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(try_from = "String", into = "String")]
pub enum WorkerSpeciality {
    #[sea_orm(string_value = "HANDYMAN")]
    Handyman,
    #[sea_orm(string_value = "DRIVER")]
    Driver,
    #[graphql(name = "AIRCONSPEC")]
    #[sea_orm(string_value = "AIRCONSPEC")]
    #[strum(serialize = "AIRCONSPEC")]
    AirconSpec,
    #[sea_orm(string_value = "PLUMBER")]
    Plumber,
}

impl TryFrom<String> for WorkerSpeciality {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse("WorkerSpeciality", &value)
    }
}

impl From<WorkerSpeciality> for String {
    fn from(value: WorkerSpeciality) -> Self {
        value.to_string()
    }
}
