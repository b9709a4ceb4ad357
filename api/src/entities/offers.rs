use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::OfferStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub offer_id: Uuid,
    #[sea_orm(indexed)]
    pub offer_job_request_id: Uuid,
    pub offer_customer_id: Uuid,
    #[sea_orm(indexed)]
    pub offer_worker_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub offer_price: f64,
    pub offer_sent_at: DateTimeWithTimeZone,
    pub offer_status: OfferStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_requests::Entity",
        from = "Column::OfferJobRequestId",
        to = "super::job_requests::Column::JobRequestId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    JobRequests,
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::OfferCustomerId",
        to = "super::customers::Column::CustomerId"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::workers::Entity",
        from = "Column::OfferWorkerId",
        to = "super::workers::Column::WorkerId"
    )]
    Workers,
}

impl Related<super::job_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobRequests.def()
    }
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::workers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
