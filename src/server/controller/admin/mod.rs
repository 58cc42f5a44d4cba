//! Handlers of the admin area.
//!
//! Every handler requires a login, resolves the addressed objects and checks that the actor
//! administers the event before doing anything else. GET handlers return the context of a
//! form, POST handlers validate the JSON body, persist it and redirect to the canonical view.

pub mod event;
pub mod export;
pub mod helper;
pub mod job;
pub mod shift;

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        agreement::{AgreementDto, AgreementForm},
        api::{ErrorDto, ValidationErrorDto},
        event::{AdminIndexDto, EventDto},
    },
    server::{
        controller::util::{actor::require_actor, admin::admin_event_by_slug},
        error::Error,
        model::app::AppState,
        service::{agreement::AgreementService, permission::require_superuser},
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Global admin page, superusers only
#[utoipa::path(
    get,
    path = "/api/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin page or no-permission notice", body = AdminIndexDto),
        (status = 303, description = "Login required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_index(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, Error> {
    let actor = require_actor(&state, &session, &uri).await?;
    require_superuser(&actor)?;

    Ok((StatusCode::OK, Json(AdminIndexDto { event: None })))
}

/// Admin page of a single event
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "Admin page or no-permission notice", body = AdminIndexDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_event(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_event_by_slug(&state, &session, &uri, &url_name).await?;

    Ok((
        StatusCode::OK,
        Json(AdminIndexDto {
            event: Some(EventDto::from(hierarchy.event()?.clone())),
        }),
    ))
}

/// Create an agreement users are asked to accept from its begin date on
#[utoipa::path(
    post,
    path = "/api/admin/agreements",
    tag = ADMIN_TAG,
    request_body = AgreementForm,
    responses(
        (status = 201, description = "Agreement created", body = AgreementDto),
        (status = 200, description = "No-permission notice", body = ErrorDto),
        (status = 303, description = "Login required"),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_agreement(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Json(form): Json<AgreementForm>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_actor(&state, &session, &uri).await?;

    let agreement = AgreementService::new(&state.db).create(&actor, form).await?;

    Ok((StatusCode::CREATED, Json(AgreementDto::from(agreement))))
}
