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
        job::{JobDeleteDto, JobDto, JobEditDto, JobForm, JobsAndShiftsDto},
    },
    server::{
        controller::util::{admin::admin_hierarchy, path::jobs_and_shifts_path},
        error::{delete::DeleteError, Error},
        model::app::AppState,
        service::{hierarchy::HierarchyQuery, job::JobService},
    },
};

use super::ADMIN_TAG;

/// Jobs of an event with their shifts and free places
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "Jobs ordered by position with their shifts", body = JobsAndShiftsDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn jobs_and_shifts(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) =
        admin_hierarchy(&state, &session, &uri, HierarchyQuery::event(&url_name)).await?;

    let overview = JobService::new(&state.db)
        .jobs_and_shifts(hierarchy.event()?)
        .await?;

    Ok((StatusCode::OK, Json(overview)))
}

/// Context of the form for a new job
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/new",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "Empty job form", body = JobEditDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn new_job_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) =
        admin_hierarchy(&state, &session, &uri, HierarchyQuery::event(&url_name)).await?;

    Ok((
        StatusCode::OK,
        Json(JobEditDto {
            event: EventDto::from(hierarchy.event()?.clone()),
            job: None,
        }),
    ))
}

/// Create a job
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/jobs/new",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    request_body = JobForm,
    responses(
        (status = 303, description = "Created, redirect to the jobs of the event"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
    Json(form): Json<JobForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) =
        admin_hierarchy(&state, &session, &uri, HierarchyQuery::event(&url_name)).await?;
    let event = hierarchy.event()?;

    let job_service = JobService::new(&state.db);
    let validated = job_service.validate(form)?;
    job_service.save(event, None, validated).await?;

    Ok(Redirect::to(&jobs_and_shifts_path(&event.url_name)))
}

/// Context of the edit form of a job
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/edit",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    responses(
        (status = 200, description = "Job form", body = JobEditDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_job_form(
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
        Json(JobEditDto {
            event: EventDto::from(hierarchy.event()?.clone()),
            job: Some(JobDto::from(hierarchy.job()?.clone())),
        }),
    ))
}

/// Update a job
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/jobs/{job}/edit",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    request_body = JobForm,
    responses(
        (status = 303, description = "Saved, redirect to the jobs of the event"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_job(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id)): Path<(String, i32)>,
    Json(form): Json<JobForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id),
    )
    .await?;
    let event = hierarchy.event()?;

    let job_service = JobService::new(&state.db);
    let validated = job_service.validate(form)?;
    job_service
        .save(event, Some(hierarchy.job()?.clone()), validated)
        .await?;

    Ok(Redirect::to(&jobs_and_shifts_path(&event.url_name)))
}

/// Delete confirmation context of a job
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/delete",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    responses(
        (status = 200, description = "Job and whether helpers registered", body = JobDeleteDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job_form(
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
    let job = hierarchy.job()?;

    let helpers_registered = JobService::new(&state.db).helpers_registered(job).await?;

    Ok((
        StatusCode::OK,
        Json(JobDeleteDto {
            event: EventDto::from(hierarchy.event()?.clone()),
            job: JobDto::from(job.clone()),
            helpers_registered,
        }),
    ))
}

/// Delete a job with its shifts and registrations
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/jobs/{job}/delete",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    request_body = DeleteForm,
    responses(
        (status = 303, description = "Deleted, redirect to the jobs of the event"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 422, description = "Delete not confirmed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id)): Path<(String, i32)>,
    Json(form): Json<DeleteForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id),
    )
    .await?;

    if !form.confirm {
        return Err(DeleteError::NotConfirmed.into());
    }

    JobService::new(&state.db).delete(hierarchy.job()?).await?;

    Ok(Redirect::to(&jobs_and_shifts_path(
        &hierarchy.event()?.url_name,
    )))
}
