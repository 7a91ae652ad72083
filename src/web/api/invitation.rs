//! Invitation endpoints.

use crate::entity::{datetime, invitation};
use crate::error::{EntityKind, WebError, WebResult};
use crate::repository::InvitationRepository;
use crate::web::response;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use chrono::NaiveDateTime;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invitations")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

#[derive(Debug, Deserialize)]
pub struct NewInvitation {
    pub token: String,
    pub email: String,
    #[serde(default, with = "datetime::option")]
    pub expiry_date: Option<NaiveDateTime>,
    pub is_used: Option<bool>,
}

/// `expiry_date` is nullable: an absent key leaves the stored value, an
/// explicit `null` clears it.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateInvitation {
    pub token: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "datetime::double_option::deserialize")]
    pub expiry_date: Option<Option<NaiveDateTime>>,
    pub is_used: Option<bool>,
}

async fn list(db: Data<DatabaseConnection>) -> WebResult<HttpResponse> {
    let invitations = InvitationRepository::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(invitations))
}

async fn get_by_id(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let invitation = InvitationRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Invitation))?;
    Ok(HttpResponse::Ok().json(invitation))
}

async fn create(db: Data<DatabaseConnection>, body: Json<NewInvitation>) -> WebResult<HttpResponse> {
    let body = body.into_inner();
    let mut model = invitation::ActiveModel {
        token: Set(body.token),
        email: Set(body.email),
        expiry_date: Set(body.expiry_date),
        ..invitation::ActiveModel::new()
    };
    if let Some(is_used) = body.is_used {
        model.is_used = Set(is_used);
    }
    let created = InvitationRepository::create(&db, model).await?;
    response::with_entity(
        StatusCode::CREATED,
        "Invitation added successfully",
        "invitation",
        &created,
    )
}

async fn update(
    db: Data<DatabaseConnection>,
    path: Path<i32>,
    body: Json<UpdateInvitation>,
) -> WebResult<HttpResponse> {
    let current = InvitationRepository::find_by_id(&db, path.into_inner())
        .await?
        .ok_or(WebError::NotFound(EntityKind::Invitation))?;
    let body = body.into_inner();
    let model = invitation::ActiveModel {
        user_id: Unchanged(current.user_id),
        token: Set(body.token.unwrap_or(current.token)),
        email: Set(body.email.unwrap_or(current.email)),
        created_at: Unchanged(current.created_at),
        expiry_date: Set(body.expiry_date.unwrap_or(current.expiry_date)),
        is_used: Set(body.is_used.unwrap_or(current.is_used)),
    };
    let updated = InvitationRepository::update(&db, model).await?;
    response::with_entity(
        StatusCode::OK,
        "Invitation updated successfully",
        "invitation",
        &updated,
    )
}

async fn delete(db: Data<DatabaseConnection>, path: Path<i32>) -> WebResult<HttpResponse> {
    let id = path.into_inner();
    if InvitationRepository::find_by_id(&db, id).await?.is_none() {
        return Err(WebError::NotFound(EntityKind::Invitation));
    }
    InvitationRepository::delete(&db, id).await?;
    Ok(response::message("Invitation deleted successfully"))
}
