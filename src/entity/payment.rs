use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue::Set};
use serde::Serialize;

/// Note: as with invitations, `user_id` is this table's own auto-increment
/// key and does not reference `users`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub supplier_name: String,
    pub invoice_number: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub amount: Decimal,
    #[serde(with = "super::datetime")]
    pub payment_date: DateTime,
    pub payment_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new() -> Self {
        Self {
            payment_date: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
    }
}
