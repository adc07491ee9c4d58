//! HTTP error mapping.
//!
//! # Responsibility
//! - Map core error variants to HTTP status codes.
//! - Render every failure as `{ statusCode, error, message }`.
//!
//! # Invariants
//! - Not-found variants map to 404, rule violations to 400, slug conflicts
//!   to 409, and storage failures to 500.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use menudesk_core::db::DbError;
use menudesk_core::{MenuRepoError, MenuServiceError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Error returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    error: &'static str,
    message: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<MenuServiceError> for ApiError {
    fn from(value: MenuServiceError) -> Self {
        let status = match &value {
            MenuServiceError::MenuNotFound(_)
            | MenuServiceError::ItemNotFound(_)
            | MenuServiceError::ParentNotFound(_)
            | MenuServiceError::RootItemMissing(_) => StatusCode::NOT_FOUND,
            MenuServiceError::Validation(_)
            | MenuServiceError::SelfParent(_)
            | MenuServiceError::CycleDetected { .. }
            | MenuServiceError::RootNotDeletable(_)
            | MenuServiceError::RootNotMovable(_) => StatusCode::BAD_REQUEST,
            MenuServiceError::SlugTaken(_) => StatusCode::CONFLICT,
            MenuServiceError::Repo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, value.to_string())
    }
}

impl From<MenuRepoError> for ApiError {
    fn from(value: MenuRepoError) -> Self {
        MenuServiceError::from(value).into()
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        MenuRepoError::from(value).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::bad_request(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(
                "event=http_error module=server status=error http_status={} error={}",
                self.status.as_u16(),
                self.message
            );
        } else {
            warn!(
                "event=http_error module=server status=rejected http_status={}",
                self.status.as_u16()
            );
        }

        let body = ErrorBody {
            status_code: self.status.as_u16(),
            error: self.status.canonical_reason().unwrap_or("Unknown"),
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use menudesk_core::{MenuRepoError, MenuServiceError, MenuValidationError};
    use uuid::Uuid;

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let id = Uuid::new_v4();
        let cases = [
            (MenuServiceError::MenuNotFound(id), StatusCode::NOT_FOUND),
            (MenuServiceError::ItemNotFound(id), StatusCode::NOT_FOUND),
            (MenuServiceError::ParentNotFound(id), StatusCode::NOT_FOUND),
            (
                MenuServiceError::Validation(MenuValidationError::BlankTitle),
                StatusCode::BAD_REQUEST,
            ),
            (
                MenuServiceError::CycleDetected {
                    item_id: id,
                    parent_id: id,
                },
                StatusCode::BAD_REQUEST,
            ),
            (MenuServiceError::RootNotDeletable(id), StatusCode::BAD_REQUEST),
            (
                MenuServiceError::SlugTaken("main".to_string()),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, expected) in cases {
            let message = err.to_string();
            let api = ApiError::from(err);
            assert_eq!(api.status(), expected);
            assert_eq!(api.message(), message);
        }
    }

    #[test]
    fn storage_race_errors_keep_client_statuses() {
        let id = Uuid::new_v4();
        let cases = [
            (
                MenuRepoError::SlugConflict("main".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                MenuRepoError::Cycle {
                    item_id: id,
                    parent_id: id,
                },
                StatusCode::BAD_REQUEST,
            ),
            (MenuRepoError::ParentNotFound(id), StatusCode::NOT_FOUND),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
