use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub inventory_id: i32,
    pub product_id: i32,
    pub store_id: i32,
    pub quantity_received: i32,
    pub quantity_in_stock: i32,
    pub quantity_spoilt: i32,
    pub payment_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::ProductId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::StoreId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Store,
    #[sea_orm(has_many = "super::supply_request::Entity")]
    SupplyRequest,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::supply_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplyRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
