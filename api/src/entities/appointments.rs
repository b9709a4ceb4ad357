use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::AppointmentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub appointment_id: Uuid,
    #[sea_orm(indexed)]
    pub appointment_customer_id: Uuid,
    #[sea_orm(indexed)]
    pub appointment_worker_id: Uuid,
    pub appointment_offer_id: Uuid,
    pub appointment_time: DateTimeWithTimeZone,
    pub appointment_status: AppointmentStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::AppointmentCustomerId",
        to = "super::customers::Column::CustomerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::workers::Entity",
        from = "Column::AppointmentWorkerId",
        to = "super::workers::Column::WorkerId"
    )]
    Workers,
    #[sea_orm(
        belongs_to = "super::offers::Entity",
        from = "Column::AppointmentOfferId",
        to = "super::offers::Column::OfferId"
    )]
    Offers,
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

impl Related<super::offers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
