//! Store endpoints.

use crate::entity::store;
use crate::error::{EntityKind, WebError, WebResult};
use crate::repository::StoreRepository;
use crate::web::response;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stores")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

#[derive(Debug, Deserialize)]
pub struct NewStore {
    pub store_name: String,
    pub location: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateStore {
    pub store_name: Option<String>,
    pub location: Option<String>,
}

async fn list(db: Data<DatabaseConnection>) -> WebResult<HttpResponse> {
    let stores = StoreRepository::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(stores))
}

async fn get_by_id(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let store = StoreRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Store))?;
    Ok(HttpResponse::Ok().json(store))
}

async fn create(db: Data<DatabaseConnection>, body: Json<NewStore>) -> WebResult<HttpResponse> {
    let body = body.into_inner();
    let model = store::ActiveModel {
        store_name: Set(body.store_name),
        location: Set(body.location),
        ..Default::default()
    };
    let created = StoreRepository::create(&db, model).await?;
    response::with_entity(
        StatusCode::CREATED,
        "Store added successfully",
        "store",
        &created,
    )
}

async fn update(
    db: Data<DatabaseConnection>,
    path: Path<i32>,
    body: Json<UpdateStore>,
) -> WebResult<HttpResponse> {
    let current = StoreRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Store))?;
    let body = body.into_inner();
    let model = store::ActiveModel {
        store_id: Unchanged(current.store_id),
        store_name: Set(body.store_name.unwrap_or(current.store_name)),
        location: Set(body.location.unwrap_or(current.location)),
    };
    let updated = StoreRepository::update(&db, model).await?;
    response::with_entity(
        StatusCode::OK,
        "Store updated successfully",
        "store",
        &updated,
    )
}

async fn delete(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let id = path.into_inner();
    if StoreRepository::find_by_id(&db, id).await?.is_none() {
        return Err(WebError::NotFound(EntityKind::Store));
    }
    StoreRepository::delete(&db, id).await?;
    Ok(response::message("Store deleted successfully"))
}
