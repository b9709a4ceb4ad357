use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub location_id: Uuid,
    pub location_lat: String,
    pub location_lng: String,
    pub location_city: String,
    pub location_province_state: String,
    pub location_zip_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_requests::Entity")]
    JobRequests,
}

impl Related<super::job_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
