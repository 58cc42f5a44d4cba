use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DeleteForm, ErrorDto, ValidationErrorDto},
        event::{EventDeleteDto, EventDto, EventEditDto, EventForm},
    },
    server::{
        controller::util::{
            actor::require_actor,
            admin::{admin_event_by_slug, admin_hierarchy},
            path::{edit_event_path, INDEX_PATH},
        },
        error::{delete::DeleteError, Error},
        model::app::AppState,
        service::{event::EventService, hierarchy::HierarchyQuery, permission::require_superuser},
    },
};

use super::ADMIN_TAG;

/// Context of the form for a new event, superusers only
#[utoipa::path(
    get,
    path = "/api/admin/events/new",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Empty event form or no-permission notice", body = EventEditDto),
        (status = 303, description = "Login required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn new_event_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, Error> {
    let actor = require_actor(&state, &session, &uri).await?;
    require_superuser(&actor)?;

    let context = EventService::new(&state.db).edit_context(None).await?;

    Ok((StatusCode::OK, Json(context)))
}

/// Create an event, superusers only
#[utoipa::path(
    post,
    path = "/api/admin/events/new",
    tag = ADMIN_TAG,
    request_body = EventForm,
    responses(
        (status = 303, description = "Created, redirect to the edit view"),
        (status = 200, description = "No-permission notice", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Json(form): Json<EventForm>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_actor(&state, &session, &uri).await?;
    require_superuser(&actor)?;

    let event_service = EventService::new(&state.db);
    let validated = event_service.validate(form, None).await?;
    let event = event_service.save(None, validated).await?;

    Ok(Redirect::to(&edit_event_path(&event.url_name)))
}

/// Context of the edit form of an event
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/edit",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "Event with its admins or no-permission notice", body = EventEditDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_event_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_event_by_slug(&state, &session, &uri, &url_name).await?;

    let context = EventService::new(&state.db)
        .edit_context(Some(hierarchy.event()?))
        .await?;

    Ok((StatusCode::OK, Json(context)))
}

/// Update an event and replace its admin set
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/edit",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    request_body = EventForm,
    responses(
        (status = 303, description = "Saved, redirect to the edit view of the new URL name"),
        (status = 200, description = "No-permission notice", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_event(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
    Json(form): Json<EventForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_event_by_slug(&state, &session, &uri, &url_name).await?;
    let existing = hierarchy.event()?;

    let event_service = EventService::new(&state.db);
    let validated = event_service.validate(form, Some(existing)).await?;
    let event = event_service.save(Some(existing.clone()), validated).await?;

    Ok(Redirect::to(&edit_event_path(&event.url_name)))
}

/// Delete confirmation context of an event
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/delete",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "Event and whether helpers registered", body = EventDeleteDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) =
        admin_hierarchy(&state, &session, &uri, HierarchyQuery::event(&url_name)).await?;
    let event = hierarchy.event()?;

    let helpers_registered = EventService::new(&state.db)
        .helpers_registered(event)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventDeleteDto {
            event: EventDto::from(event.clone()),
            helpers_registered,
        }),
    ))
}

/// Delete an event with its jobs, shifts, helpers and admin memberships
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/delete",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    request_body = DeleteForm,
    responses(
        (status = 303, description = "Deleted, redirect to the event list"),
        (status = 200, description = "No-permission notice", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Delete not confirmed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
    Json(form): Json<DeleteForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) =
        admin_hierarchy(&state, &session, &uri, HierarchyQuery::event(&url_name)).await?;

    if !form.confirm {
        return Err(DeleteError::NotConfirmed.into());
    }

    EventService::new(&state.db)
        .delete(hierarchy.event()?)
        .await?;

    Ok(Redirect::to(INDEX_PATH))
}
