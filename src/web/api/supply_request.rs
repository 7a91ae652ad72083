//! Supply request endpoints.
//!
//! `status` is a free-form string with no transition rules; clients may set
//! it to anything and back.

use crate::entity::supply_request;
use crate::error::{EntityKind, WebError, WebResult};
use crate::repository::SupplyRequestRepository;
use crate::web::response;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/supply-requests")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

#[derive(Debug, Deserialize)]
pub struct NewSupplyRequest {
    pub inventory_id: i32,
    pub user_id: i32,
    pub status: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateSupplyRequest {
    pub inventory_id: Option<i32>,
    pub user_id: Option<i32>,
    pub status: Option<String>,
}

async fn list(db: Data<DatabaseConnection>) -> WebResult<HttpResponse> {
    let requests = SupplyRequestRepository::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(requests))
}

async fn get_by_id(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let request = SupplyRequestRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::SupplyRequest))?;
    Ok(HttpResponse::Ok().json(request))
}

async fn create(
    db: Data<DatabaseConnection>,
    body: Json<NewSupplyRequest>,
) -> WebResult<HttpResponse> {
    let body = body.into_inner();
    let model = supply_request::ActiveModel {
        inventory_id: Set(body.inventory_id),
        user_id: Set(body.user_id),
        status: Set(body.status),
        ..supply_request::ActiveModel::new()
    };
    let created = SupplyRequestRepository::create(&db, model).await?;
    response::with_entity(
        StatusCode::CREATED,
        "Supply request added successfully",
        "request",
        &created,
    )
}

async fn update(
    db: Data<DatabaseConnection>,
    path: Path<i32>,
    body: Json<UpdateSupplyRequest>,
) -> WebResult<HttpResponse> {
    let current = SupplyRequestRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::SupplyRequest))?;
    let body = body.into_inner();
    let model = supply_request::ActiveModel {
        request_id: Unchanged(current.request_id),
        inventory_id: Set(body.inventory_id.unwrap_or(current.inventory_id)),
        user_id: Set(body.user_id.unwrap_or(current.user_id)),
        request_date: Unchanged(current.request_date),
        status: Set(body.status.unwrap_or(current.status)),
    };
    let updated = SupplyRequestRepository::update(&db, model).await?;
    response::with_entity(
        StatusCode::OK,
        "Supply request updated successfully",
        "request",
        &updated,
    )
}

async fn delete(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let id = path.into_inner();
    if SupplyRequestRepository::find_by_id(&db, id).await?.is_none() {
        return Err(WebError::NotFound(EntityKind::SupplyRequest));
    }
    SupplyRequestRepository::delete(&db, id).await?;
    Ok(response::message("Supply request deleted successfully"))
}
