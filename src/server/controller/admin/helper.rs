use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        helper::{HelperDeleteDto, HelperDeleteForm, HelperEditDto, HelperForm, HelpersDto, JobHelpersDto},
    },
    server::{
        controller::util::{
            admin::admin_hierarchy,
            path::{helpers_path, job_helpers_path},
        },
        error::Error,
        model::app::AppState,
        service::{helper::HelperService, hierarchy::HierarchyQuery},
    },
};

use super::ADMIN_TAG;

/// Number of helpers per job of an event
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/helpers",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "Jobs with their helper count", body = HelpersDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn helpers(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) =
        admin_hierarchy(&state, &session, &uri, HierarchyQuery::event(&url_name)).await?;

    let overview = HelperService::new(&state.db)
        .overview(hierarchy.event()?)
        .await?;

    Ok((StatusCode::OK, Json(overview)))
}

/// Shifts of a job with their registered helpers
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/helpers",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    responses(
        (status = 200, description = "Shifts ordered by begin with their helpers", body = JobHelpersDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn job_helpers(
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

    let job_helpers = HelperService::new(&state.db)
        .job_helpers(hierarchy.event()?, hierarchy.job()?)
        .await?;

    Ok((StatusCode::OK, Json(job_helpers)))
}

/// Context of the edit form of a helper
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/helpers/{helper}/edit",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("helper" = i32, Path, description = "ID of the helper")
    ),
    responses(
        (status = 200, description = "Helper with the registered shifts", body = HelperEditDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event or helper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_helper_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, helper_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).helper(helper_id),
    )
    .await?;

    let context = HelperService::new(&state.db)
        .edit_context(hierarchy.event()?, hierarchy.helper()?)
        .await?;

    Ok((StatusCode::OK, Json(context)))
}

/// Update the personal data of a helper
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/helpers/{helper}/edit",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("helper" = i32, Path, description = "ID of the helper")
    ),
    request_body = HelperForm,
    responses(
        (status = 303, description = "Saved, redirect to the helpers of the event"),
        (status = 404, description = "Event or helper not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_helper(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, helper_id)): Path<(String, i32)>,
    Json(form): Json<HelperForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).helper(helper_id),
    )
    .await?;

    let helper_service = HelperService::new(&state.db);
    let validated = helper_service.validate(form)?;
    helper_service
        .save(hierarchy.helper()?.clone(), validated)
        .await?;

    Ok(Redirect::to(&helpers_path(&hierarchy.event()?.url_name)))
}

/// Delete confirmation context of a helper within a job
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/helpers/{helper}/delete",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job"),
        ("helper" = i32, Path, description = "ID of the helper")
    ),
    responses(
        (status = 200, description = "Helper with the shifts within the job", body = HelperDeleteDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event, job or helper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_helper_form(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id, helper_id)): Path<(String, i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id).helper(helper_id),
    )
    .await?;

    let context = HelperService::new(&state.db)
        .delete_context(hierarchy.event()?, hierarchy.job()?, hierarchy.helper()?)
        .await?;

    Ok((StatusCode::OK, Json(context)))
}

/// Remove a helper from selected shifts of a job
///
/// Without a selection the helper is removed from all shifts of the job. A helper left
/// without any registration is deleted.
#[utoipa::path(
    post,
    path = "/api/admin/events/{event}/jobs/{job}/helpers/{helper}/delete",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job"),
        ("helper" = i32, Path, description = "ID of the helper")
    ),
    request_body = HelperDeleteForm,
    responses(
        (status = 303, description = "Removed, redirect to the helpers of the job"),
        (status = 404, description = "Event, job or helper not found", body = ErrorDto),
        (status = 422, description = "Not confirmed or invalid shift selection", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_helper(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((url_name, job_id, helper_id)): Path<(String, i32, i32)>,
    Json(form): Json<HelperDeleteForm>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) = admin_hierarchy(
        &state,
        &session,
        &uri,
        HierarchyQuery::event(&url_name).job(job_id).helper(helper_id),
    )
    .await?;
    let job = hierarchy.job()?;

    HelperService::new(&state.db)
        .delete(job, hierarchy.helper()?, form)
        .await?;

    Ok(Redirect::to(&job_helpers_path(
        &hierarchy.event()?.url_name,
        job.id,
    )))
}
