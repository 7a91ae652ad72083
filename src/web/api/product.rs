//! Product endpoints.
//!
//! Prices are decimal strings on the wire (numbers are accepted on input).
//! Deleting a product that inventory rows still reference is refused with
//! a 409; nothing cascades.

use crate::entity::product;
use crate::error::{EntityKind, WebError, WebResult};
use crate::repository::ProductRepository;
use crate::web::response;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub product_name: String,
    pub buying_price: Option<Decimal>,
    pub selling_price: Option<Decimal>,
}

/// Prices are nullable: an absent key leaves the stored value, an explicit
/// `null` clears it.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateProduct {
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub buying_price: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub selling_price: Option<Option<Decimal>>,
}

async fn list(db: Data<DatabaseConnection>) -> WebResult<HttpResponse> {
    let products = ProductRepository::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(products))
}

async fn get_by_id(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let product = ProductRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Product))?;
    Ok(HttpResponse::Ok().json(product))
}

async fn create(db: Data<DatabaseConnection>, body: Json<NewProduct>) -> WebResult<HttpResponse> {
    let body = body.into_inner();
    let model = product::ActiveModel {
        product_name: Set(body.product_name),
        buying_price: Set(body.buying_price),
        selling_price: Set(body.selling_price),
        ..Default::default()
    };
    let created = ProductRepository::create(&db, model).await?;
    response::with_entity(
        StatusCode::CREATED,
        "Product added successfully",
        "product",
        &created,
    )
}

async fn update(
    db: Data<DatabaseConnection>,
    path: Path<i32>,
    body: Json<UpdateProduct>,
) -> WebResult<HttpResponse> {
    let current = ProductRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Product))?;
    let body = body.into_inner();
    let model = product::ActiveModel {
        product_id: Unchanged(current.product_id),
        product_name: Set(body.product_name.unwrap_or(current.product_name)),
        buying_price: Set(body.buying_price.unwrap_or(current.buying_price)),
        selling_price: Set(body.selling_price.unwrap_or(current.selling_price)),
    };
    let updated = ProductRepository::update(&db, model).await?;
    response::with_entity(
        StatusCode::OK,
        "Product updated successfully",
        "product",
        &updated,
    )
}

async fn delete(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let id = path.into_inner();
    if ProductRepository::find_by_id(&db, id).await?.is_none() {
        return Err(WebError::NotFound(EntityKind::Product));
    }
    ProductRepository::delete(&db, id).await?;
    Ok(response::message("Product deleted successfully"))
}
