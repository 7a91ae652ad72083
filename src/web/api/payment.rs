//! Supplier payment endpoints.
//!
//! `amount` is a decimal, never a binary float. `payment_date` defaults to
//! the current UTC time when the create body omits it.

use crate::entity::{datetime, payment};
use crate::error::{EntityKind, WebError, WebResult};
use crate::repository::PaymentRepository;
use crate::web::response;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

#[derive(Debug, Deserialize)]
pub struct NewPayment {
    pub supplier_name: String,
    pub invoice_number: String,
    pub amount: Decimal,
    #[serde(default, with = "datetime::option")]
    pub payment_date: Option<NaiveDateTime>,
    pub payment_status: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdatePayment {
    pub supplier_name: Option<String>,
    pub invoice_number: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(default, with = "datetime::option")]
    pub payment_date: Option<NaiveDateTime>,
    pub payment_status: Option<String>,
}

async fn list(db: Data<DatabaseConnection>) -> WebResult<HttpResponse> {
    let payments = PaymentRepository::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(payments))
}

async fn get_by_id(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let payment = PaymentRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Payment))?;
    Ok(HttpResponse::Ok().json(payment))
}

async fn create(db: Data<DatabaseConnection>, body: Json<NewPayment>) -> WebResult<HttpResponse> {
    let body = body.into_inner();
    let mut model = payment::ActiveModel {
        supplier_name: Set(body.supplier_name),
        invoice_number: Set(body.invoice_number),
        amount: Set(body.amount),
        payment_status: Set(body.payment_status),
        ..payment::ActiveModel::new()
    };
    if let Some(payment_date) = body.payment_date {
        model.payment_date = Set(payment_date);
    }
    let created = PaymentRepository::create(&db, model).await?;
    response::with_entity(
        StatusCode::CREATED,
        "Payment added successfully",
        "payment",
        &created,
    )
}

async fn update(
    db: Data<DatabaseConnection>,
    path: Path<i32>,
    body: Json<UpdatePayment>,
) -> WebResult<HttpResponse> {
    let current = PaymentRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Payment))?;
    let body = body.into_inner();
    let model = payment::ActiveModel {
        user_id: Unchanged(current.user_id),
        supplier_name: Set(body.supplier_name.unwrap_or(current.supplier_name)),
        invoice_number: Set(body.invoice_number.unwrap_or(current.invoice_number)),
        amount: Set(body.amount.unwrap_or(current.amount)),
        payment_date: Set(body.payment_date.unwrap_or(current.payment_date)),
        payment_status: Set(body.payment_status.unwrap_or(current.payment_status)),
    };
    let updated = PaymentRepository::update(&db, model).await?;
    response::with_entity(
        StatusCode::OK,
        "Payment updated successfully",
        "payment",
        &updated,
    )
}

async fn delete(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let id = path.into_inner();
    if PaymentRepository::find_by_id(&db, id).await?.is_none() {
        return Err(WebError::NotFound(EntityKind::Payment));
    }
    PaymentRepository::delete(&db, id).await?;
    Ok(response::message("Payment deleted successfully"))
}
