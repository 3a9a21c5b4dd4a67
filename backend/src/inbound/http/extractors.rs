//! Extractor configuration mapping framework-level rejections into the
//! standard error envelope.
//!
//! A malformed JSON body never reaches a handler; without these handlers
//! Actix would answer with its plain-text defaults instead of the `ApiError`
//! shape clients parse. Path extraction splits by verb: the read routes parse
//! the id themselves via [`read_path_id`] so an unparseable id is
//! indistinguishable from an absent record (404), while the delete routes
//! extract `web::Path<Uuid>` and answer 400 through [`path_config`].

use actix_web::{error::JsonPayloadError, error::PathError, web, HttpRequest};
use uuid::Uuid;

use crate::domain::Error;
use crate::inbound::http::ApiError;

/// Parse the id segment of a read route, treating unparseable input as a
/// missing record.
pub(crate) fn read_path_id(raw: &str, missing: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::from(Error::not_found(missing)))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(Error::invalid_request(format!("invalid request body: {err}"))).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(Error::invalid_request(format!(
        "invalid path parameter: {err}"
    )))
    .into()
}

/// JSON body configuration emitting envelope-shaped 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path parameter configuration emitting envelope-shaped 400s.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
