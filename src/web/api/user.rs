//! User management endpoints.
//!
//! Serialized users include `password_hash`; the stored contract returns
//! every column and clients depend on it. See DESIGN.md before changing.

use crate::entity::user;
use crate::error::{EntityKind, WebError, WebResult};
use crate::repository::UserRepository;
use crate::web::response;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Absent fields keep their stored values. `is_active` carries no lifecycle;
/// it is a plain flag set by the client.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

async fn list(db: Data<DatabaseConnection>) -> WebResult<HttpResponse> {
    let users = UserRepository::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(users))
}

async fn get_by_id(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let user = UserRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::User))?;
    Ok(HttpResponse::Ok().json(user))
}

async fn create(db: Data<DatabaseConnection>, body: Json<NewUser>) -> WebResult<HttpResponse> {
    let body = body.into_inner();
    let model = user::ActiveModel {
        username: Set(body.username),
        email: Set(body.email),
        password_hash: Set(body.password_hash),
        role: Set(body.role),
        ..user::ActiveModel::new()
    };
    let created = UserRepository::create(&db, model).await?;
    response::with_entity(StatusCode::CREATED, "User added successfully", "user", &created)
}

async fn update(
    db: Data<DatabaseConnection>,
    path: Path<i32>,
    body: Json<UpdateUser>,
) -> WebResult<HttpResponse> {
    let current = UserRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::User))?;
    let body = body.into_inner();
    let model = user::ActiveModel {
        user_id: Unchanged(current.user_id),
        username: Set(body.username.unwrap_or(current.username)),
        email: Set(body.email.unwrap_or(current.email)),
        password_hash: Set(body.password_hash.unwrap_or(current.password_hash)),
        role: Set(body.role.unwrap_or(current.role)),
        is_active: Set(body.is_active.unwrap_or(current.is_active)),
    };
    let updated = UserRepository::update(&db, model).await?;
    response::with_entity(StatusCode::OK, "User updated successfully", "user", &updated)
}

async fn delete(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let id = path.into_inner();
    if UserRepository::find_by_id(&db, id).await?.is_none() {
        return Err(WebError::NotFound(EntityKind::User));
    }
    UserRepository::delete(&db, id).await?;
    Ok(response::message("User deleted successfully"))
}
