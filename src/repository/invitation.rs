use crate::entity::invitation::{self, Entity as Invitation};
use crate::error::StorageResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

pub struct InvitationRepository;

impl InvitationRepository {
    pub async fn find_all(db: &DatabaseConnection) -> StorageResult<Vec<invitation::Model>> {
        Ok(Invitation::find().all(db).await?)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> StorageResult<Option<invitation::Model>> {
        Ok(Invitation::find_by_id(id).one(db).await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        model: invitation::ActiveModel,
    ) -> StorageResult<invitation::Model> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: invitation::ActiveModel,
    ) -> StorageResult<invitation::Model> {
        Ok(model.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<u64> {
        Ok(Invitation::delete_by_id(id).exec(db).await?.rows_affected)
    }
}
