use crate::entity::product::{self, Entity as Product};
use crate::error::StorageResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

pub struct ProductRepository;

impl ProductRepository {
    pub async fn find_all(db: &DatabaseConnection) -> StorageResult<Vec<product::Model>> {
        Ok(Product::find().all(db).await?)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> StorageResult<Option<product::Model>> {
        Ok(Product::find_by_id(id).one(db).await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        model: product::ActiveModel,
    ) -> StorageResult<product::Model> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: product::ActiveModel,
    ) -> StorageResult<product::Model> {
        Ok(model.update(db).await?)
    }

    /// Fails with a foreign key violation while inventory rows still
    /// reference the product.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<u64> {
        Ok(Product::delete_by_id(id).exec(db).await?.rows_affected)
    }
}
