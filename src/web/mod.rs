//! HTTP surface of the service.

pub mod api;
pub mod response;

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

/// Register extractor configuration and every entity's routes. Used by the
/// binary and by the integration tests so both serve the identical surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .configure(api::configure_routes);
}

// Malformed bodies and non-integer ids surface as 400 with the same
// `{"error": ...}` shape the handlers use.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}
