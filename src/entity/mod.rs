use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::debug;

pub mod datetime;
pub mod invitation;
pub mod inventory;
pub mod payment;
pub mod product;
pub mod store;
pub mod supply_request;
pub mod user;

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut create_stmt = schema.create_table_from_entity(entity);
    create_stmt.if_not_exists();
    db.execute(backend.build(&create_stmt)).await?;
    debug!(table = entity.table_name(), "table ready");
    Ok(())
}

/// Create every table from the entity definitions, skipping tables that
/// already exist. Referenced tables are created before the tables that hold
/// foreign keys onto them.
pub async fn schema_setup(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, user::Entity).await?;
    create_table(db, invitation::Entity).await?;
    create_table(db, product::Entity).await?;
    create_table(db, store::Entity).await?;
    create_table(db, inventory::Entity).await?;
    create_table(db, supply_request::Entity).await?;
    create_table(db, payment::Entity).await?;
    Ok(())
}
