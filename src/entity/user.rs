use sea_orm::{entity::prelude::*, ActiveValue::Set};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supply_request::Entity")]
    SupplyRequest,
}

impl Related<super::supply_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplyRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Fresh record with defaults applied; accounts start active.
    pub fn new() -> Self {
        Self {
            is_active: Set(true),
            ..Default::default()
        }
    }
}
