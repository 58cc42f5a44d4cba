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
        event::EventDto,
        job::JobDto,
        shift::{ShiftDeleteDto, ShiftEditDto, ShiftForm},
    },
    server::{
        controller::util::{admin::admin_hierarchy, path::jobs_and_shifts_path},
        error::{delete::DeleteError, Error},
        model::app::AppState,
        service::{hierarchy::HierarchyQuery, shift::ShiftService},
    },
};

use super::ADMIN_TAG;

/// Context of the form for a new shift
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/shifts/new",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    responses(
        (status = 200, description = "Empty shift form", body = ShiftEditDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn new_shift_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id),
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ShiftEditDto {
            event: EventDto::from(hierarchy.event()?.clone()),
            job: JobDto::from(hierarchy.job()?.clone()),
            shift: None,
        }),
    ))
}

/// Create a shift
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/jobs/{job}/shifts/new",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    request_body = ShiftForm,
    responses(
        (status = 303, description = "Created, redirect to the jobs of the event"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shift(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id)): Path<(String, i32)>,
    Json(form): Json<ShiftForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id),
    )
    .await?;

    let shift_service = ShiftService::new(&state.db);
    let validated = shift_service.validate(form, None).await?;
    shift_service
        .save(hierarchy.job()?, None, validated)
        .await?;

    Ok(Redirect::to(&jobs_and_shifts_path(
        &hierarchy.event()?.url_name,
    )))
}

/// Context of the edit form of a shift
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/shifts/{shift}/edit",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job"),
        ("shift" = i32, Path, description = "ID of the shift")
    ),
    responses(
        (status = 200, description = "Shift form", body = ShiftEditDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event, job or shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_shift_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id, shift_id)): Path<(String, i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id).shift(shift_id),
    )
    .await?;

    let shift = ShiftService::new(&state.db)
        .to_dto(hierarchy.shift()?.clone())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ShiftEditDto {
            event: EventDto::from(hierarchy.event()?.clone()),
            job: JobDto::from(hierarchy.job()?.clone()),
            shift: Some(shift),
        }),
    ))
}

/// Update a shift
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/jobs/{job}/shifts/{shift}/edit",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job"),
        ("shift" = i32, Path, description = "ID of the shift")
    ),
    request_body = ShiftForm,
    responses(
        (status = 303, description = "Saved, redirect to the jobs of the event"),
        (status = 404, description = "Event, job or shift not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_shift(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id, shift_id)): Path<(String, i32, i32)>,
    Json(form): Json<ShiftForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id).shift(shift_id),
    )
    .await?;
    let shift = hierarchy.shift()?;

    let shift_service = ShiftService::new(&state.db);
    let validated = shift_service.validate(form, Some(shift)).await?;
    shift_service
        .save(hierarchy.job()?, Some(shift.clone()), validated)
        .await?;

    Ok(Redirect::to(&jobs_and_shifts_path(
        &hierarchy.event()?.url_name,
    )))
}

/// Delete confirmation context of a shift
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/shifts/{shift}/delete",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job"),
        ("shift" = i32, Path, description = "ID of the shift")
    ),
    responses(
        (status = 200, description = "Shift with its registration count", body = ShiftDeleteDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event, job or shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shift_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id, shift_id)): Path<(String, i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id).shift(shift_id),
    )
    .await?;

    let shift = ShiftService::new(&state.db)
        .to_dto(hierarchy.shift()?.clone())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ShiftDeleteDto {
            event: EventDto::from(hierarchy.event()?.clone()),
            job: JobDto::from(hierarchy.job()?.clone()),
            helpers_registered: shift.registered > 0,
            shift,
        }),
    ))
}

/// Delete a shift with its registrations
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/jobs/{job}/shifts/{shift}/delete",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job"),
        ("shift" = i32, Path, description = "ID of the shift")
    ),
    request_body = DeleteForm,
    responses(
        (status = 303, description = "Deleted, redirect to the jobs of the event"),
        (status = 404, description = "Event, job or shift not found", body = ErrorDto),
        (status = 422, description = "Delete not confirmed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shift(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id, shift_id)): Path<(String, i32, i32)>,
    Json(form): Json<DeleteForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id).shift(shift_id),
    )
    .await?;

    if !form.confirm {
        return Err(DeleteError::NotConfirmed.into());
    }

    ShiftService::new(&state.db)
        .delete(hierarchy.shift()?)
        .await?;

    Ok(Redirect::to(&jobs_and_shifts_path(
        &hierarchy.event()?.url_name,
    )))
}
