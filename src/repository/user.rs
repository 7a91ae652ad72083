use crate::entity::user::{self, Entity as User};
use crate::error::StorageResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_all(db: &DatabaseConnection) -> StorageResult<Vec<user::Model>> {
        Ok(User::find().all(db).await?)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> StorageResult<Option<user::Model>> {
        Ok(User::find_by_id(id).one(db).await?)
    }

    pub async fn create(db: &DatabaseConnection, model: user::ActiveModel) -> StorageResult<user::Model> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(db: &DatabaseConnection, model: user::ActiveModel) -> StorageResult<user::Model> {
        Ok(model.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<u64> {
        Ok(User::delete_by_id(id).exec(db).await?.rows_affected)
    }
}
