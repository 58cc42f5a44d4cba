//! Error types for the shiftdesk server.
//!
//! Every domain has its own error enum implementing `IntoResponse`, the [`Error`] enum
//! aggregates them together with errors of external libraries so handlers can use `?`
//! throughout. Errors without a dedicated mapping become a logged 500 response.

pub mod access;
pub mod config;
pub mod delete;
pub mod notification;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        access::AccessError, config::ConfigError, delete::DeleteError,
        validation::ValidationError,
    },
};

/// Main error type of the server.
///
/// Uses `#[from]` so that domain errors, database errors and session errors convert
/// automatically with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variable.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Unknown object, broken hierarchy, missing login or missing permission.
    #[error(transparent)]
    AccessError(#[from] AccessError),
    /// Submitted form failed validation, nothing was written.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Delete request that was not confirmed or selected invalid shifts.
    #[error(transparent)]
    DeleteError(#[from] DeleteError),
    /// Failed to parse a value from a string.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Indicates a bug in shiftdesk, should never occur in normal operation.
    #[error("Internal error in shiftdesk, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Request body that could not be read as the expected JSON.
    #[error(transparent)]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Rendering the roster workbook failed.
    #[error(transparent)]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 200 OK - No permission to administer the event (rendered notice)
/// - 303 See Other - Login required, redirect to the login page
/// - 404 Not Found - Unknown object or object outside of the requested event
/// - 422 Unprocessable Entity - Invalid form or unconfirmed delete
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AccessError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::DeleteError(err) => err.into_response(),
            Self::JsonRejection(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
