//! Error handlers
//!
//! Maps gateway errors onto HTTP responses.

use crate::error::types::GatewayError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use serde::Serialize;

/// Body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Log a gateway error at a level matching who caused it
pub fn handle_error(err: &GatewayError) {
    if err.is_server_error() {
        error!("Gateway error: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }
}

/// Convert error to HTTP status code
pub fn error_to_status_code(err: &GatewayError) -> StatusCode {
    match err {
        GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
        GatewayError::NotAFile(_) => StatusCode::NOT_FOUND,
        GatewayError::NotADirectory(_) => StatusCode::NOT_FOUND,
        GatewayError::FileExists(_) => StatusCode::CONFLICT,
        GatewayError::DirectoryExists(_) => StatusCode::CONFLICT,
        GatewayError::PathEscapesRoot(_) => StatusCode::FORBIDDEN,
        GatewayError::RootProtected(_) => StatusCode::FORBIDDEN,
        GatewayError::BadRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GatewayError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Detail text sent to the client; server faults are not described
pub fn error_detail(err: &GatewayError) -> String {
    if err.is_server_error() {
        "Internal server error".to_string()
    } else {
        err.to_string()
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        handle_error(&self);
        let status = error_to_status_code(&self);
        let body = ErrorBody {
            detail: error_detail(&self),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            error_to_status_code(&GatewayError::NotAFile("a".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_to_status_code(&GatewayError::DirectoryExists("a".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_to_status_code(&GatewayError::PathEscapesRoot("..".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            error_to_status_code(&GatewayError::BadRequest("bad json".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn server_errors_hide_details() {
        let err = GatewayError::IoError(io::Error::new(io::ErrorKind::Other, "/secret/path"));
        assert_eq!(error_detail(&err), "Internal server error");
        assert_eq!(error_to_status_code(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
