use crate::entity::inventory::{self, Entity as Inventory};
use crate::error::StorageResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

pub struct InventoryRepository;

impl InventoryRepository {
    pub async fn find_all(db: &DatabaseConnection) -> StorageResult<Vec<inventory::Model>> {
        Ok(Inventory::find().all(db).await?)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> StorageResult<Option<inventory::Model>> {
        Ok(Inventory::find_by_id(id).one(db).await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        model: inventory::ActiveModel,
    ) -> StorageResult<inventory::Model> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: inventory::ActiveModel,
    ) -> StorageResult<inventory::Model> {
        Ok(model.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<u64> {
        Ok(Inventory::delete_by_id(id).exec(db).await?.rows_affected)
    }
}
