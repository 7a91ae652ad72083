use crate::entity::supply_request::{self, Entity as SupplyRequest};
use crate::error::StorageResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

pub struct SupplyRequestRepository;

impl SupplyRequestRepository {
    pub async fn find_all(db: &DatabaseConnection) -> StorageResult<Vec<supply_request::Model>> {
        Ok(SupplyRequest::find().all(db).await?)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> StorageResult<Option<supply_request::Model>> {
        Ok(SupplyRequest::find_by_id(id).one(db).await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        model: supply_request::ActiveModel,
    ) -> StorageResult<supply_request::Model> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: supply_request::ActiveModel,
    ) -> StorageResult<supply_request::Model> {
        Ok(model.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<u64> {
        Ok(SupplyRequest::delete_by_id(id).exec(db).await?.rows_affected)
    }
}
