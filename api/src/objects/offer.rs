use async_graphql::SimpleObject;
use hub_core::uuid::Uuid;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::OfferStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub worker_id: Uuid,
    pub job_id: Uuid,
    pub price: f64,
    pub sent_at: DateTimeWithTimeZone,
    pub status: OfferStatus,
    pub suggested_time: Option<DateTimeWithTimeZone>,
}
