use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use std::fmt;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;
pub type WebResult<T> = Result<T, WebError>;

/// Failures from the resource store, with constraint violations classified
/// out of the raw driver error so the web layer can map them to 409.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("duplicate value violates a unique constraint")]
    UniqueViolation,
    #[error("operation violates a foreign key constraint")]
    ForeignKeyViolation,
    #[error("database error: `{0}`")]
    Db(DbErr),
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StorageError::UniqueViolation,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => StorageError::ForeignKeyViolation,
            // SQLite reports `ON DELETE RESTRICT` violations with extended
            // code 1811 (SQLITE_CONSTRAINT_TRIGGER), which `sql_err()` does
            // not classify; fall back on the driver message.
            _ if err.to_string().contains("FOREIGN KEY constraint failed") => {
                StorageError::ForeignKeyViolation
            }
            _ => StorageError::Db(err),
        }
    }
}

/// The seven resource types, as they appear in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Invitation,
    Product,
    Store,
    Inventory,
    SupplyRequest,
    Payment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Invitation => "Invitation",
            EntityKind::Product => "Product",
            EntityKind::Store => "Store",
            EntityKind::Inventory => "Inventory",
            EntityKind::SupplyRequest => "Supply request",
            EntityKind::Payment => "Payment",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0} not found")]
    NotFound(EntityKind),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Storage(StorageError::UniqueViolation)
            | WebError::Storage(StorageError::ForeignKeyViolation) => StatusCode::CONFLICT,
            WebError::Internal(_) | WebError::Storage(StorageError::Db(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(
            WebError::NotFound(EntityKind::SupplyRequest).to_string(),
            "Supply request not found"
        );
        assert_eq!(
            WebError::NotFound(EntityKind::User).to_string(),
            "User not found"
        );
    }

    #[test]
    fn restrict_violation_classified_from_driver_message() {
        // extended code 1811 escapes sql_err(); the message fallback must
        // still classify it as an FK violation
        let err = DbErr::Exec(sea_orm::RuntimeErr::Internal(
            "error returned from database: (code: 1811) FOREIGN KEY constraint failed".to_owned(),
        ));
        assert!(matches!(
            StorageError::from(err),
            StorageError::ForeignKeyViolation
        ));

        let err = DbErr::Exec(sea_orm::RuntimeErr::Internal("disk I/O error".to_owned()));
        assert!(matches!(StorageError::from(err), StorageError::Db(_)));
    }

    #[test]
    fn constraint_violations_map_to_conflict() {
        let err = WebError::Storage(StorageError::UniqueViolation);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        let err = WebError::Storage(StorageError::ForeignKeyViolation);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
