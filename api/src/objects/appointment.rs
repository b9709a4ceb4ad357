use async_graphql::SimpleObject;
use hub_core::uuid::Uuid;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub worker_id: Uuid,
    pub offer_id: Uuid,
    pub time: DateTimeWithTimeZone,
    pub status: AppointmentStatus,
}
