use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message rendered instead of an admin page when the actor may not administer the event
pub const NO_PERMISSION_MESSAGE: &str = "You do not have the permission to administer this event.";

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    /// Unknown ID or slug, or an object that is not part of the requested parent.
    #[error("Requested object does not exist or does not belong to the requested parent")]
    NotFound,
    #[error("Actor is not allowed to administer the requested event")]
    PermissionDenied,
    /// Unauthenticated request to a page requiring a login, `location` is the login URL
    /// including the `next` parameter.
    #[error("Login required, redirecting to {location}")]
    LoginRequired { location: String },
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PermissionDenied => {
                tracing::debug!("{}", self);

                (
                    StatusCode::OK,
                    Json(ErrorDto {
                        error: NO_PERMISSION_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::LoginRequired { location } => Redirect::to(&location).into_response(),
        }
    }
}
