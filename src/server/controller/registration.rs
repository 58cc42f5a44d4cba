use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        event::EventIndexDto,
        registration::{RegisterForm, RegisteredDto, RegistrationFormDto},
    },
    server::{
        controller::util::{
            actor::{get_actor, login_required},
            path::registered_path,
        },
        error::{access::AccessError, Error},
        model::{app::AppState, db::EventModel},
        service::{
            event::EventService,
            hierarchy::{HierarchyQuery, HierarchyResolver},
            registration::{RegistrationAccess, RegistrationService},
        },
    },
};

pub static REGISTRATION_TAG: &str = "registration";

/// Resolves the event and applies the registration access rule
async fn open_event(
    state: &AppState,
    session: &Session,
    uri: &axum::http::Uri,
    url_name: &str,
) -> Result<EventModel, Error> {
    let hierarchy = HierarchyResolver::new(&state.db)
        .get_or_404(HierarchyQuery::event(url_name))
        .await?;
    let event = hierarchy.event()?.clone();

    let actor = get_actor(state, session).await?;
    let registration_service = RegistrationService::new(&state.db, state.notifier.as_ref());

    match registration_service.access(&event, actor.as_ref()).await? {
        RegistrationAccess::Open => Ok(event),
        RegistrationAccess::LoginRequired => Err(login_required(&state.login_url, uri).into()),
        RegistrationAccess::Denied => Err(AccessError::PermissionDenied.into()),
    }
}

/// List events open for registration
///
/// Inactive events are included for users administering them.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = REGISTRATION_TAG,
    responses(
        (status = 200, description = "Active and administered events", body = EventIndexDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let events = EventService::new(&state.db).index(actor.as_ref()).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Registration form context of an event
#[utoipa::path(
    get,
    path = "/api/events/{event}/register",
    tag = REGISTRATION_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "Event with its jobs and shifts", body = RegistrationFormDto),
        (status = 303, description = "Inactive event, login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let event = open_event(&state, &session, &uri, &url_name).await?;

    let registration_service = RegistrationService::new(&state.db, state.notifier.as_ref());
    let form = registration_service.form(&event).await?;

    Ok((StatusCode::OK, Json(form)))
}

/// Register a helper for one or more shifts
///
/// # Responses
/// - 303 (See Other): Registered, redirect to the confirmation view
/// - 422 (Unprocessable Entity): Invalid form or a selected shift is full, nothing was stored
#[utoipa::path(
    post,
    path = "/api/events/{event}/register",
    tag = REGISTRATION_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    request_body = RegisterForm,
    responses(
        (status = 303, description = "Registered, redirect to the confirmation"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
    form: Result<Json<RegisterForm>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let event = open_event(&state, &session, &uri, &url_name).await?;
    // Body errors only surface once access to the event is granted
    let Json(form) = form?;

    let registration_service = RegistrationService::new(&state.db, state.notifier.as_ref());
    let registration = registration_service.validate(&event, form).await?;
    let helper = registration_service.register(&event, registration).await?;

    Ok(Redirect::to(&registered_path(&event.url_name, helper.id)))
}

/// Confirmation of a registration with the helper's shifts
#[utoipa::path(
    get,
    path = "/api/events/{event}/registered/{helper}",
    tag = REGISTRATION_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("helper" = i32, Path, description = "ID of the registered helper")
    ),
    responses(
        (status = 200, description = "Helper with the registered shifts", body = RegisteredDto),
        (status = 404, description = "Event or helper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn registered(
    State(state): State<AppState>,
    Path((url_name, helper_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let hierarchy = HierarchyResolver::new(&state.db)
        .get_or_404(HierarchyQuery::event(&url_name).helper(helper_id))
        .await?;

    let registration_service = RegistrationService::new(&state.db, state.notifier.as_ref());
    let registered = registration_service
        .registered(hierarchy.event()?, hierarchy.helper()?)
        .await?;

    Ok((StatusCode::OK, Json(registered)))
}
