use async_graphql::SimpleObject;
use hub_core::uuid::Uuid;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use super::Offer;
use crate::entities::sea_orm_active_enums::{JobStatus, WorkerSpeciality};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub location: Option<Location>,
    pub city: String,
    pub status: JobStatus,
    pub title: String,
    pub description: String,
    pub total_cost: f64,
    pub offers: Vec<Offer>,
    pub sent_at: DateTimeWithTimeZone,
    pub completed_at: Option<DateTimeWithTimeZone>,
    pub speciality: WorkerSpeciality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub lng: i32,
    pub lat: i32,
    pub state: String,
    pub city: String,
    pub address: String,
}
