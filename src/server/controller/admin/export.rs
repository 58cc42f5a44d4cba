use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::admin::admin_hierarchy,
        error::Error,
        model::{
            app::AppState,
            db::{EventModel, JobModel},
        },
        service::{
            export::{export_filename, ExportService, XLSX_CONTENT_TYPE},
            hierarchy::HierarchyQuery,
        },
        util::filename::attachment_disposition,
    },
};

use super::ADMIN_TAG;

async fn xlsx_response(
    state: &AppState,
    event: &EventModel,
    job: Option<&JobModel>,
) -> Result<impl IntoResponse, Error> {
    let bytes = ExportService::new(&state.db).export(event, job).await?;
    let filename = format!("{}.xlsx", export_filename(event, job));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, attachment_disposition(&filename)),
        ],
        bytes,
    ))
}

/// Roster of every job of an event as xlsx workbook
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/excel",
    tag = ADMIN_TAG,
    params(("event" = String, Path, description = "URL name of the event")),
    responses(
        (status = 200, description = "xlsx workbook with one worksheet per job", body = Vec<u8>, content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_event(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(url_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (_, hierarchy) =
        admin_hierarchy(&state, &session, &uri, HierarchyQuery::event(&url_name)).await?;

    xlsx_response(&state, hierarchy.event()?, None).await
}

/// Roster of a single job as xlsx workbook
#[utoipa::path(
    get,
    path = "/api/admin/events/{event}/jobs/{job}/excel",
    tag = ADMIN_TAG,
    params(
        ("event" = String, Path, description = "URL name of the event"),
        ("job" = i32, Path, description = "ID of the job")
    ),
    responses(
        (status = 200, description = "xlsx workbook with the job's worksheet", body = Vec<u8>, content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 303, description = "Login required"),
        (status = 404, description = "Event or job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_job(
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

    xlsx_response(&state, hierarchy.event()?, Some(hierarchy.job()?)).await
}
