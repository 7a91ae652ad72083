use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue::Set};
use serde::Serialize;

/// Note: `user_id` is this table's own auto-increment key, not a reference
/// into `users`. The column name is inherited from the original schema.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "invitations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub token: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(with = "super::datetime")]
    pub created_at: DateTime,
    #[serde(with = "super::datetime::option")]
    pub expiry_date: Option<DateTime>,
    pub is_used: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new() -> Self {
        Self {
            created_at: Set(Utc::now().naive_utc()),
            is_used: Set(false),
            ..Default::default()
        }
    }
}
