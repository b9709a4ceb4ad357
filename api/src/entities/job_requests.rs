use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{JobStatus, WorkerSpeciality};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub job_request_id: Uuid,
    #[sea_orm(indexed)]
    pub job_request_customer_id: Uuid,
    pub job_request_location_id: Uuid,
    pub job_request_sent_at: DateTimeWithTimeZone,
    pub job_request_completed_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(indexed)]
    pub job_request_city: String,
    pub job_request_status: JobStatus,
    pub job_request_title: String,
    pub job_request_description: String,
    #[sea_orm(column_type = "Double")]
    pub job_request_total_cost: f64,
    #[sea_orm(indexed)]
    pub job_request_speciality: WorkerSpeciality,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::JobRequestCustomerId",
        to = "super::customers::Column::CustomerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::JobRequestLocationId",
        to = "super::locations::Column::LocationId"
    )]
    Locations,
    #[sea_orm(has_many = "super::offers::Entity")]
    Offers,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::offers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
