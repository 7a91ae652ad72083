use crate::entity::store::{self, Entity as Store};
use crate::error::StorageResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

pub struct StoreRepository;

impl StoreRepository {
    pub async fn find_all(db: &DatabaseConnection) -> StorageResult<Vec<store::Model>> {
        Ok(Store::find().all(db).await?)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> StorageResult<Option<store::Model>> {
        Ok(Store::find_by_id(id).one(db).await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        model: store::ActiveModel,
    ) -> StorageResult<store::Model> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: store::ActiveModel,
    ) -> StorageResult<store::Model> {
        Ok(model.update(db).await?)
    }

    /// Fails with a foreign key violation while inventory rows still
    /// reference the store.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<u64> {
        Ok(Store::delete_by_id(id).exec(db).await?.rows_affected)
    }
}
