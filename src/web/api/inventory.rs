//! Inventory endpoints.
//!
//! `product_id` and `store_id` must reference existing rows; the store
//! enforces this and a bad reference surfaces as a 409 with no row created.

use crate::entity::inventory;
use crate::error::{EntityKind, WebError, WebResult};
use crate::repository::InventoryRepository;
use crate::web::response;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/inventories")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

#[derive(Debug, Deserialize)]
pub struct NewInventory {
    pub product_id: i32,
    pub store_id: i32,
    pub quantity_received: i32,
    pub quantity_in_stock: i32,
    pub quantity_spoilt: i32,
    pub payment_status: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateInventory {
    pub product_id: Option<i32>,
    pub store_id: Option<i32>,
    pub quantity_received: Option<i32>,
    pub quantity_in_stock: Option<i32>,
    pub quantity_spoilt: Option<i32>,
    pub payment_status: Option<String>,
}

async fn list(db: Data<DatabaseConnection>) -> WebResult<HttpResponse> {
    let inventories = InventoryRepository::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(inventories))
}

async fn get_by_id(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let inventory = InventoryRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Inventory))?;
    Ok(HttpResponse::Ok().json(inventory))
}

async fn create(db: Data<DatabaseConnection>, body: Json<NewInventory>) -> WebResult<HttpResponse> {
    let body = body.into_inner();
    let model = inventory::ActiveModel {
        product_id: Set(body.product_id),
        store_id: Set(body.store_id),
        quantity_received: Set(body.quantity_received),
        quantity_in_stock: Set(body.quantity_in_stock),
        quantity_spoilt: Set(body.quantity_spoilt),
        payment_status: Set(body.payment_status),
        ..Default::default()
    };
    let created = InventoryRepository::create(&db, model).await?;
    response::with_entity(
        StatusCode::CREATED,
        "Inventory added successfully",
        "inventory",
        &created,
    )
}

async fn update(
    db: Data<DatabaseConnection>,
    path: Path<i32>,
    body: Json<UpdateInventory>,
) -> WebResult<HttpResponse> {
    let current = InventoryRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Inventory))?;
    let body = body.into_inner();
    let model = inventory::ActiveModel {
        inventory_id: Unchanged(current.inventory_id),
        product_id: Set(body.product_id.unwrap_or(current.product_id)),
        store_id: Set(body.store_id.unwrap_or(current.store_id)),
        quantity_received: Set(body.quantity_received.unwrap_or(current.quantity_received)),
        quantity_in_stock: Set(body.quantity_in_stock.unwrap_or(current.quantity_in_stock)),
        quantity_spoilt: Set(body.quantity_spoilt.unwrap_or(current.quantity_spoilt)),
        payment_status: Set(body.payment_status.unwrap_or(current.payment_status)),
    };
    let updated = InventoryRepository::update(&db, model).await?;
    response::with_entity(
        StatusCode::OK,
        "Inventory updated successfully",
        "inventory",
        &updated,
    )
}

async fn delete(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let id = path.into_inner();
    if InventoryRepository::find_by_id(&db, id).await?.is_none() {
        return Err(WebError::NotFound(EntityKind::Inventory));
    }
    InventoryRepository::delete(&db, id).await?;
    Ok(response::message("Inventory deleted successfully"))
}
