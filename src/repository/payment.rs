use crate::entity::payment::{self, Entity as Payment};
use crate::error::StorageResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

pub struct PaymentRepository;

impl PaymentRepository {
    pub async fn find_all(db: &DatabaseConnection) -> StorageResult<Vec<payment::Model>> {
        Ok(Payment::find().all(db).await?)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> StorageResult<Option<payment::Model>> {
        Ok(Payment::find_by_id(id).one(db).await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        model: payment::ActiveModel,
    ) -> StorageResult<payment::Model> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: payment::ActiveModel,
    ) -> StorageResult<payment::Model> {
        Ok(model.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<u64> {
        Ok(Payment::delete_by_id(id).exec(db).await?.rows_affected)
    }
}
